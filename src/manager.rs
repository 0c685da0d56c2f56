//! Scene state management: textures, materials and the shader state of every draw.
//!
//! The [`SceneManager`] owns the texture and material registries. Everything that
//! happens right before a mesh draw (uploading the model matrix, choosing a colour
//! or texture, switching the material) goes through it, and [`SceneManager::render_scene`]
//! runs a whole list of [`DrawCommand`]s that way.

use std::path::Path;

use cgmath::{Vector2, Vector4};

use crate::{
    data_structures::{
        light::{MAX_POINT_LIGHTS, PointLight},
        material::{Material, MaterialRegistry},
        mesh::Primitive,
        scene::{DrawCommand, SceneDescription, Surface},
        texture::Texture,
        transform::Transform,
    },
    resources::texture::TextureRegistry,
    shader::{ObjectState, ShaderUniforms, UniformBlock, names},
};

/// One interpreted draw: which mesh to draw with which shader state.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub mesh: Primitive,
    pub object: ObjectState,
}

/// Owner of the scene's textures and materials.
///
/// Generic over the texture handle so the bookkeeping can run without a GPU.
#[derive(Debug)]
pub struct SceneManager<T = Texture> {
    pub textures: TextureRegistry<T>,
    pub materials: MaterialRegistry,
}

impl<T> Default for SceneManager<T> {
    fn default() -> Self {
        Self {
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
        }
    }
}

impl<T> SceneManager<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot of `tag` as the shader expects it, `-1` if the tag is unknown.
    fn sampler_slot(&self, tag: &str) -> i32 {
        match self.textures.slot_of(tag) {
            Some(slot) => slot as i32,
            None => {
                log::warn!("No texture is registered under '{}'", tag);
                -1
            }
        }
    }

    /// Compose the model matrix from `transform` and upload it.
    pub fn set_transformations(&self, shader: &mut impl ShaderUniforms, transform: &Transform) {
        shader.set_mat4(names::MODEL, transform.to_matrix());
    }

    /// Draw with a solid colour, texturing off.
    pub fn set_shader_color(&self, shader: &mut impl ShaderUniforms, r: f32, g: f32, b: f32, a: f32) {
        shader.set_bool(names::USE_TEXTURE, false);
        shader.set_vec4(names::OBJECT_COLOR, Vector4::new(r, g, b, a));
        shader.set_float(names::BLEND_FACTOR, 0.0);
    }

    /// Draw with the texture registered under `tag`.
    pub fn set_shader_texture(&self, shader: &mut impl ShaderUniforms, tag: &str) {
        let slot = self.sampler_slot(tag);
        shader.set_bool(names::USE_TEXTURE, true);
        shader.set_sampler(names::OBJECT_TEXTURE, slot);
        shader.set_sampler(names::BLEND_TEXTURE, slot);
        shader.set_float(names::BLEND_FACTOR, 0.0);
    }

    /// Draw with a linear mix of two textures.
    ///
    /// A `factor` of 0 shows only `tag`, 1 only `blend_tag`. Values outside 0..=1
    /// are clamped.
    pub fn set_shader_textures(
        &self,
        shader: &mut impl ShaderUniforms,
        tag: &str,
        blend_tag: &str,
        factor: f32,
    ) {
        let slot = self.sampler_slot(tag);
        let blend_slot = self.sampler_slot(blend_tag);
        shader.set_bool(names::USE_TEXTURE, true);
        shader.set_sampler(names::OBJECT_TEXTURE, slot);
        shader.set_sampler(names::BLEND_TEXTURE, blend_slot);
        shader.set_float(names::BLEND_FACTOR, factor.clamp(0.0, 1.0));
    }

    pub fn set_texture_uv_scale(&self, shader: &mut impl ShaderUniforms, u: f32, v: f32) {
        shader.set_vec2(names::UV_SCALE, Vector2::new(u, v));
    }

    /// Upload the material registered under `tag`. Unknown tags leave the current
    /// material in place.
    pub fn set_shader_material(&self, shader: &mut impl ShaderUniforms, tag: &str) {
        match self.materials.find(tag) {
            Some(material) => {
                shader.set_vec3(names::MATERIAL_DIFFUSE, material.diffuse);
                shader.set_vec3(names::MATERIAL_SPECULAR, material.specular);
                shader.set_float(names::MATERIAL_SHININESS, material.shininess);
            }
            None => log::warn!("No material is defined under '{}'", tag),
        }
    }

    /// Enable lighting and upload `lights`. Light slots beyond the given lights are
    /// switched off.
    pub fn setup_lights(&self, shader: &mut impl ShaderUniforms, lights: &[PointLight]) {
        if lights.len() > MAX_POINT_LIGHTS {
            log::warn!(
                "{} point lights given, only the first {} are used",
                lights.len(),
                MAX_POINT_LIGHTS
            );
        }
        shader.set_bool(names::USE_LIGHTING, true);
        for index in 0..MAX_POINT_LIGHTS {
            let light = lights.get(index).copied().unwrap_or_default();
            let name = |field: &str| names::point_light(index, field);
            shader.set_vec3(&name("position"), light.position);
            shader.set_vec3(&name("ambient"), light.ambient);
            shader.set_vec3(&name("diffuse"), light.diffuse);
            shader.set_vec3(&name("specular"), light.specular);
            shader.set_float(&name("constant"), light.constant);
            shader.set_float(&name("linear"), light.linear);
            shader.set_float(&name("quadratic"), light.quadratic);
            shader.set_bool(&name("bActive"), light.active);
        }
    }

    pub fn define_materials(&mut self, materials: &[Material]) {
        materials
            .iter()
            .cloned()
            .for_each(|material| self.materials.push(material));
    }

    /// Apply the state of one command to `shader`.
    pub fn apply_command(&self, shader: &mut impl ShaderUniforms, command: &DrawCommand) {
        self.set_transformations(shader, &command.transform);
        match &command.surface {
            Surface::Texture(tag) => self.set_shader_texture(shader, tag),
            Surface::Blend {
                tag,
                blend_tag,
                factor,
            } => self.set_shader_textures(shader, tag, blend_tag, *factor),
            Surface::Color([r, g, b, a]) => self.set_shader_color(shader, *r, *g, *b, *a),
        }
        if let Some(tag) = command.material {
            self.set_shader_material(shader, tag);
        }
        if let Some((u, v)) = command.uv_scale {
            self.set_texture_uv_scale(shader, u, v);
        }
    }

    /// Run `commands` in order and return the draw each one produces.
    ///
    /// State is carried from one command to the next, so a material or UV scale
    /// stays in effect until a later command changes it.
    pub fn render_scene(&self, commands: &[DrawCommand], shader: &mut UniformBlock) -> Vec<DrawCall> {
        commands
            .iter()
            .map(|command| {
                self.apply_command(shader, command);
                DrawCall {
                    mesh: command.mesh,
                    object: shader.object.clone(),
                }
            })
            .collect()
    }
}

impl SceneManager<Texture> {
    /// Load the textures and define the materials of `scene`.
    ///
    /// Texture failures are logged and skipped: draws using them still render.
    pub async fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        root: &Path,
        scene: &SceneDescription,
    ) {
        let loaded = self
            .textures
            .load_all(device, queue, root, &scene.textures)
            .await;
        if loaded < scene.textures.len() {
            log::warn!(
                "Loaded {} of {} scene textures",
                loaded,
                scene.textures.len()
            );
        }
        self.define_materials(&scene.materials);
        log::debug!(
            "Scene prepared with {} textures and {} materials",
            self.textures.len(),
            self.materials.len()
        );
    }
}
