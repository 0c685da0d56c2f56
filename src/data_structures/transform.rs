//! Per-draw transform parameters and model matrix composition.
//!
//! A [`Transform`] is the scale / rotation / translation triple that is set right
//! before every mesh draw. Nothing about it is persisted: it is composed into a
//! model matrix and handed to the shader.

use cgmath::{Deg, Matrix4, Vector3};

/// Scale, rotation (Euler angles in degrees around X, Y and Z) and translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub translation: Vector3<f32>,
}

impl Transform {
    /// Create a transform with identity values (no scale, rotation or move).
    pub fn new() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            translation: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    /// Build a transform from plain arrays, the form scene data is written in.
    pub fn from_arrays(scale: [f32; 3], rotation: [f32; 3], translation: [f32; 3]) -> Self {
        Self {
            scale: scale.into(),
            rotation: rotation.into(),
            translation: translation.into(),
        }
    }

    /// Compose the model matrix `T * Rz * Ry * Rx * S`.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        compose(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(translation: Vector3<f32>) -> Self {
        Transform {
            translation,
            ..Default::default()
        }
    }
}

/// Compose a model matrix from independent scale, rotation and translation.
///
/// The rotation order is fixed: X first, then Y, then Z, all applied after
/// scaling and before translation. Angles are in degrees.
pub fn compose(
    scale: Vector3<f32>,
    rotation_degrees: Vector3<f32>,
    translation: Vector3<f32>,
) -> Matrix4<f32> {
    let scale = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
    let rotation_x = Matrix4::from_angle_x(Deg(rotation_degrees.x));
    let rotation_y = Matrix4::from_angle_y(Deg(rotation_degrees.y));
    let rotation_z = Matrix4::from_angle_z(Deg(rotation_degrees.z));
    let translation = Matrix4::from_translation(translation);

    translation * rotation_z * rotation_y * rotation_x * scale
}
