//! Named surface materials and their registry.

use cgmath::Vector3;

/// Diffuse/specular colours and shininess, looked up by tag at draw time.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub tag: String,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    pub fn new(tag: &str, diffuse: [f32; 3], specular: [f32; 3], shininess: f32) -> Self {
        Self {
            tag: tag.to_string(),
            diffuse: diffuse.into(),
            specular: specular.into(),
            shininess,
        }
    }
}

/// Ordered list of materials.
///
/// The list is filled once while preparing a scene and only read afterwards.
/// Lookups are first-match, so redefining a tag adds an entry that is never found.
#[derive(Clone, Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material to the registry.
    pub fn define(&mut self, tag: &str, diffuse: [f32; 3], specular: [f32; 3], shininess: f32) {
        self.push(Material::new(tag, diffuse, specular, shininess));
    }

    pub fn push(&mut self, material: Material) {
        if self.find(&material.tag).is_some() {
            log::warn!(
                "Material '{}' is already defined, the new definition is shadowed by the first one.",
                material.tag
            );
        }
        self.materials.push(material);
    }

    /// Find the first material registered under `tag`.
    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }
}

impl FromIterator<Material> for MaterialRegistry {
    fn from_iter<I: IntoIterator<Item = Material>>(iter: I) -> Self {
        let mut registry = Self::new();
        iter.into_iter().for_each(|material| registry.push(material));
        registry
    }
}
