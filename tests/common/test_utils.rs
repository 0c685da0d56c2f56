#![allow(dead_code)]

use std::io::Cursor;

use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use image::{DynamicImage, ImageFormat};
use pc_diorama::{
    SceneManager, ShaderUniforms, resources::texture::TextureRegistry,
};

pub const EPSILON: f32 = 1e-5;

/// A uniform value as it was handed to the shader.
#[derive(Clone, Debug, PartialEq)]
pub enum Uniform {
    Mat4(Matrix4<f32>),
    Vec4(Vector4<f32>),
    Vec3(Vector3<f32>),
    Vec2(Vector2<f32>),
    Float(f32),
    Int(i32),
    Bool(bool),
}

/// Shader stand-in that remembers every call in order.
#[derive(Debug, Default)]
pub struct RecordingShader {
    pub calls: Vec<(String, Uniform)>,
}

impl RecordingShader {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent value set under `name`.
    pub fn last(&self, name: &str) -> Option<&Uniform> {
        self.calls
            .iter()
            .rev()
            .find(|(call, _)| call == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> Vec<&str> {
        self.calls.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl ShaderUniforms for RecordingShader {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.calls.push((name.to_string(), Uniform::Mat4(value)));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.calls.push((name.to_string(), Uniform::Vec4(value)));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.calls.push((name.to_string(), Uniform::Vec3(value)));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.calls.push((name.to_string(), Uniform::Vec2(value)));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.calls.push((name.to_string(), Uniform::Float(value)));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.calls.push((name.to_string(), Uniform::Int(value)));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.calls.push((name.to_string(), Uniform::Bool(value)));
    }
}

/// A registry with one `u32` handle per tag, registered in order.
pub fn registry_with(tags: &[&str]) -> TextureRegistry<u32> {
    let mut registry = TextureRegistry::new();
    for (handle, tag) in tags.iter().enumerate() {
        registry
            .insert(tag, handle as u32 + 100)
            .expect("test tags fit into the registry");
    }
    registry
}

pub fn manager_with_textures(tags: &[&str]) -> SceneManager<u32> {
    SceneManager {
        textures: registry_with(tags),
        ..SceneManager::new()
    }
}

/// Encode `img` as a PNG file in memory.
pub fn png_bytes(img: &DynamicImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("PNG encoding of a test image");
    bytes.into_inner()
}

/// A 2x2 RGB image: red, green on the top row, blue, white on the bottom row.
pub fn quad_image() -> DynamicImage {
    let mut img = image::RgbImage::new(2, 2);
    img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
    img.put_pixel(1, 0, image::Rgb([0, 255, 0]));
    img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
    img.put_pixel(1, 1, image::Rgb([255, 255, 255]));
    DynamicImage::ImageRgb8(img)
}

pub fn assert_vec3_near(actual: Vector3<f32>, expected: Vector3<f32>) {
    assert!(
        (actual.x - expected.x).abs() < EPSILON
            && (actual.y - expected.y).abs() < EPSILON
            && (actual.z - expected.z).abs() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

pub fn assert_mat4_near(actual: Matrix4<f32>, expected: Matrix4<f32>) {
    let actual: [[f32; 4]; 4] = actual.into();
    let expected: [[f32; 4]; 4] = expected.into();
    for (column, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        for row in 0..4 {
            assert!(
                (a[row] - e[row]).abs() < EPSILON,
                "matrices differ at column {} row {}: {:?} vs {:?}",
                column,
                row,
                actual,
                expected
            );
        }
    }
}

/// A headless device, or `None` when the machine has no usable adapter.
#[cfg(feature = "integration-tests")]
pub fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    futures::executor::block_on(async {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions::default())
            .await
            .ok()?;
        adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .ok()
    })
}

/// A fresh directory under the system temp dir, unique per test name and process.
pub fn fixture_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("pc-diorama-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("textures")).expect("creating a fixture directory");
    dir
}
