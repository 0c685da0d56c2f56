//! Declarative scene records.
//!
//! A scene is plain data: which textures to load, which materials and lights to
//! define, and an ordered list of [`DrawCommand`]s. The [`crate::manager::SceneManager`]
//! interprets the list every frame, so scenes can be built, inspected and tested
//! without a GPU.

use crate::data_structures::{
    light::PointLight,
    material::Material,
    mesh::Primitive,
    transform::Transform,
};

/// An image file to load and the tag it is registered under.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureSource {
    pub path: String,
    pub tag: String,
}

impl TextureSource {
    pub fn new(path: &str, tag: &str) -> Self {
        Self {
            path: path.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// How the surface of a draw is coloured.
#[derive(Clone, Debug, PartialEq)]
pub enum Surface {
    /// Sample the texture registered under the tag.
    Texture(&'static str),
    /// Mix two textures, `factor` 0 shows only `tag`, 1 only `blend_tag`.
    Blend {
        tag: &'static str,
        blend_tag: &'static str,
        factor: f32,
    },
    /// Solid RGBA colour, texturing disabled.
    Color([f32; 4]),
}

/// One mesh draw with the full state it needs.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub mesh: Primitive,
    pub transform: Transform,
    pub surface: Surface,
    /// Material to switch to. `None` keeps whatever material the previous draw used.
    pub material: Option<&'static str>,
    /// UV scale to switch to. `None` keeps the current scale.
    pub uv_scale: Option<(f32, f32)>,
}

impl DrawCommand {
    pub fn new(mesh: Primitive, scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> Self {
        Self {
            mesh,
            transform: Transform::from_arrays(scale, rotation, position),
            surface: Surface::Color([1.0, 1.0, 1.0, 1.0]),
            material: None,
            uv_scale: None,
        }
    }

    pub fn textured(mut self, tag: &'static str) -> Self {
        self.surface = Surface::Texture(tag);
        self
    }

    pub fn blended(mut self, tag: &'static str, blend_tag: &'static str, factor: f32) -> Self {
        self.surface = Surface::Blend {
            tag,
            blend_tag,
            factor,
        };
        self
    }

    pub fn coloured(mut self, rgba: [f32; 4]) -> Self {
        self.surface = Surface::Color(rgba);
        self
    }

    pub fn with_material(mut self, tag: &'static str) -> Self {
        self.material = Some(tag);
        self
    }

    pub fn with_uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Some((u, v));
        self
    }

    /// Texture tags this command samples from.
    pub fn texture_tags(&self) -> Vec<&'static str> {
        match self.surface {
            Surface::Texture(tag) => vec![tag],
            Surface::Blend { tag, blend_tag, .. } => vec![tag, blend_tag],
            Surface::Color(_) => vec![],
        }
    }
}

/// Everything needed to prepare and draw a scene.
#[derive(Clone, Debug, Default)]
pub struct SceneDescription {
    pub textures: Vec<TextureSource>,
    pub materials: Vec<Material>,
    pub lights: Vec<PointLight>,
    pub commands: Vec<DrawCommand>,
}

impl SceneDescription {
    /// Texture and material tags that commands use but the scene never defines.
    ///
    /// Such draws still render (with the `-1` sampler or the previous material), so
    /// this is the place to catch typos in scene data.
    pub fn undefined_tags(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for command in self.commands.iter() {
            for tag in command.texture_tags() {
                if !self.textures.iter().any(|texture| texture.tag == tag) && !missing.contains(&tag) {
                    missing.push(tag);
                }
            }
            if let Some(tag) = command.material {
                if !self.materials.iter().any(|material| material.tag == tag) && !missing.contains(&tag)
                {
                    missing.push(tag);
                }
            }
        }
        missing
    }
}
