//! Point lights with distance attenuation.

use cgmath::Vector3;

/// Highest number of point lights the shader reads.
pub const MAX_POINT_LIGHTS: usize = 8;

/// A point light with Phong colour terms and `1 / (c + l*d + q*d^2)` attenuation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
    pub active: bool,
}

impl PointLight {
    /// An active light at `position` with the given colour terms and a
    /// medium-range falloff.
    pub fn new(position: [f32; 3], ambient: [f32; 3], diffuse: [f32; 3], specular: [f32; 3]) -> Self {
        Self {
            position: position.into(),
            ambient: ambient.into(),
            diffuse: diffuse.into(),
            specular: specular.into(),
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
            active: true,
        }
    }

    pub fn with_attenuation(mut self, constant: f32, linear: f32, quadratic: f32) -> Self {
        self.constant = constant;
        self.linear = linear;
        self.quadratic = quadratic;
        self
    }

    pub fn to_raw(&self) -> PointLightRaw {
        PointLightRaw {
            position: self.position.into(),
            constant: self.constant,
            ambient: self.ambient.into(),
            linear: self.linear,
            diffuse: self.diffuse.into(),
            quadratic: self.quadratic,
            specular: self.specular.into(),
            active: self.active as u32,
        }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            ambient: Vector3::new(0.0, 0.0, 0.0),
            diffuse: Vector3::new(0.0, 0.0, 0.0),
            specular: Vector3::new(0.0, 0.0, 0.0),
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
            active: false,
        }
    }
}

/**
 * GPU layout of a point light. Every vec3 is followed by a scalar so the struct
 * matches the 16 byte alignment of uniform buffers without extra padding.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightRaw {
    position: [f32; 3],
    constant: f32,
    ambient: [f32; 3],
    linear: f32,
    diffuse: [f32; 3],
    quadratic: f32,
    specular: [f32; 3],
    active: u32,
}

/// Uniform buffer content for all point lights.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub lights: [PointLightRaw; MAX_POINT_LIGHTS],
}

impl LightsUniform {
    pub fn new(lights: &[PointLight; MAX_POINT_LIGHTS]) -> Self {
        Self {
            lights: (*lights).map(|light| light.to_raw()),
        }
    }
}
