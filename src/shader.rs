//! The uniform boundary between scene code and the scene shader.
//!
//! Scene code talks to the shader through named uniforms (`model`, `objectColor`,
//! `pointLights[2].diffuse`, ...) via the [`ShaderUniforms`] trait. [`UniformBlock`]
//! is the implementation used for rendering: it keeps a CPU mirror of every named
//! value and packs it into the layouts the GPU reads.
//!
//! Per-draw values end up in an [`ObjectRaw`], which is uploaded as one instance of
//! the instance buffer, while the lights end up in a [`LightsUniform`].

use cgmath::{Matrix, Matrix3, Matrix4, SquareMatrix, Vector2, Vector3, Vector4};

use crate::data_structures::{
    light::{LightsUniform, MAX_POINT_LIGHTS, PointLight},
    mesh::Vertex,
};

/// Names of the uniforms understood by the scene shader.
pub mod names {
    pub const MODEL: &str = "model";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const BLEND_TEXTURE: &str = "blendTexture";
    pub const BLEND_FACTOR: &str = "blendFactor";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const UV_SCALE: &str = "UVscale";
    pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    /// `pointLights[index].field`
    pub fn point_light(index: usize, field: &str) -> String {
        format!("pointLights[{}].{}", index, field)
    }
}

/// Typed setters for named shader uniforms.
///
/// Setting a name the implementation does not know must not fail: it is a scene
/// authoring mistake and ends up as a wrong looking draw, never as a crash.
pub trait ShaderUniforms {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_bool(&mut self, name: &str, value: bool);

    /// Select the texture slot a sampler uniform reads from. `-1` selects nothing.
    fn set_sampler(&mut self, name: &str, slot: i32) {
        self.set_int(name, slot);
    }
}

/// Everything the shader needs to draw one mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectState {
    pub model: Matrix4<f32>,
    pub normal: Matrix3<f32>,
    pub color: Vector4<f32>,
    pub use_texture: bool,
    pub object_texture: i32,
    pub blend_texture: i32,
    pub blend_factor: f32,
    pub uv_scale: Vector2<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub shininess: f32,
    pub use_lighting: bool,
}

impl Default for ObjectState {
    fn default() -> Self {
        Self {
            model: Matrix4::identity(),
            normal: Matrix3::identity(),
            color: Vector4::new(1.0, 1.0, 1.0, 1.0),
            use_texture: false,
            object_texture: -1,
            blend_texture: -1,
            blend_factor: 0.0,
            uv_scale: Vector2::new(1.0, 1.0),
            diffuse: Vector3::new(1.0, 1.0, 1.0),
            specular: Vector3::new(0.0, 0.0, 0.0),
            shininess: 32.0,
            use_lighting: false,
        }
    }
}

impl ObjectState {
    pub fn to_raw(&self) -> ObjectRaw {
        ObjectRaw {
            model: self.model.into(),
            normal: self.normal.into(),
            color: self.color.into(),
            diffuse_shininess: [self.diffuse.x, self.diffuse.y, self.diffuse.z, self.shininess],
            specular_blend: [
                self.specular.x,
                self.specular.y,
                self.specular.z,
                self.blend_factor,
            ],
            uv_scale: self.uv_scale.into(),
            flags: [
                self.object_texture,
                self.blend_texture,
                self.use_texture as i32,
                self.use_lighting as i32,
            ],
        }
    }
}

/// Normals follow the inverse transpose of the model matrix. Singular matrices
/// (a zero scale somewhere) keep the model matrix itself.
fn normal_matrix(model: &Matrix4<f32>) -> Matrix3<f32> {
    let m = model.invert().map_or(*model, |inverse| inverse.transpose());
    Matrix3::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate())
}

/**
 * The per-draw state as stored in the instance buffer.
 *
 * Every field is a 4 byte type so the struct has no padding and can be cast to bytes.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectRaw {
    model: [[f32; 4]; 4],
    normal: [[f32; 3]; 3],
    color: [f32; 4],
    diffuse_shininess: [f32; 4],
    specular_blend: [f32; 4],
    uv_scale: [f32; 2],
    // object slot, blend slot, use texture, use lighting
    flags: [i32; 4],
}

impl Vertex for ObjectRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        const ATTRIBUTES: [wgpu::VertexAttribute; 12] = wgpu::vertex_attr_array![
            // model matrix, one vec4 per column
            3 => Float32x4,
            4 => Float32x4,
            5 => Float32x4,
            6 => Float32x4,
            // normal matrix
            7 => Float32x3,
            8 => Float32x3,
            9 => Float32x3,
            10 => Float32x4,
            11 => Float32x4,
            12 => Float32x4,
            13 => Float32x2,
            14 => Sint32x4,
        ];
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ObjectRaw>() as wgpu::BufferAddress,
            // one instance per draw call
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}

/// CPU mirror of every uniform of the scene shader.
#[derive(Clone, Debug, Default)]
pub struct UniformBlock {
    pub object: ObjectState,
    pub lights: [PointLight; MAX_POINT_LIGHTS],
}

enum LightField<'a> {
    Known(usize, &'a str),
    OutOfRange(usize),
}

fn parse_light_name(name: &str) -> Option<LightField<'_>> {
    let rest = name.strip_prefix("pointLights[")?;
    let (index, field) = rest.split_once("].")?;
    let index: usize = index.parse().ok()?;
    if index < MAX_POINT_LIGHTS {
        Some(LightField::Known(index, field))
    } else {
        Some(LightField::OutOfRange(index))
    }
}

impl UniformBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lights_uniform(&self) -> LightsUniform {
        LightsUniform::new(&self.lights)
    }

    /// The light a `pointLights[i].field` name refers to, plus the field.
    fn light_mut<'n>(&mut self, name: &'n str, kind: &str) -> Option<(&mut PointLight, &'n str)> {
        match parse_light_name(name) {
            Some(LightField::Known(index, field)) => Some((&mut self.lights[index], field)),
            Some(LightField::OutOfRange(index)) => {
                log::warn!(
                    "Point light {} is out of range, only {} lights are supported",
                    index,
                    MAX_POINT_LIGHTS
                );
                None
            }
            None => {
                Self::unknown(name, kind);
                None
            }
        }
    }

    fn unknown(name: &str, kind: &str) {
        log::warn!("Shader has no {} uniform named '{}'", kind, name);
    }
}

impl ShaderUniforms for UniformBlock {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        match name {
            names::MODEL => {
                self.object.model = value;
                self.object.normal = normal_matrix(&value);
            }
            _ => Self::unknown(name, "mat4"),
        }
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        match name {
            names::OBJECT_COLOR => self.object.color = value,
            _ => Self::unknown(name, "vec4"),
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        match name {
            names::MATERIAL_DIFFUSE => self.object.diffuse = value,
            names::MATERIAL_SPECULAR => self.object.specular = value,
            _ => {
                if let Some((light, field)) = self.light_mut(name, "vec3") {
                    match field {
                        "position" => light.position = value,
                        "ambient" => light.ambient = value,
                        "diffuse" => light.diffuse = value,
                        "specular" => light.specular = value,
                        _ => Self::unknown(name, "vec3"),
                    }
                }
            }
        }
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        match name {
            names::UV_SCALE => self.object.uv_scale = value,
            _ => Self::unknown(name, "vec2"),
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        match name {
            names::BLEND_FACTOR => self.object.blend_factor = value,
            names::MATERIAL_SHININESS => self.object.shininess = value,
            _ => {
                if let Some((light, field)) = self.light_mut(name, "float") {
                    match field {
                        "constant" => light.constant = value,
                        "linear" => light.linear = value,
                        "quadratic" => light.quadratic = value,
                        _ => Self::unknown(name, "float"),
                    }
                }
            }
        }
    }

    fn set_int(&mut self, name: &str, value: i32) {
        match name {
            names::OBJECT_TEXTURE => self.object.object_texture = value,
            names::BLEND_TEXTURE => self.object.blend_texture = value,
            _ => Self::unknown(name, "int"),
        }
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        match name {
            names::USE_TEXTURE => self.object.use_texture = value,
            names::USE_LIGHTING => self.object.use_lighting = value,
            _ => {
                if let Some((light, field)) = self.light_mut(name, "bool") {
                    match field {
                        "bActive" => light.active = value,
                        _ => Self::unknown(name, "bool"),
                    }
                }
            }
        }
    }
}
