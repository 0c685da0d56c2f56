//! Window, camera and asset configuration.

use std::path::PathBuf;

use cgmath::Deg;

/// Environment variable that overrides [`Config::asset_root`].
pub const ASSET_ROOT_VAR: &str = "DIORAMA_ASSET_ROOT";

/// Placement of the fixed camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Rotation around Y, -90° looks down the negative Z axis.
    pub yaw: Deg<f32>,
    pub pitch: Deg<f32>,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 8.0, 22.0],
            yaw: Deg(-90.0),
            pitch: Deg(-5.0),
            fovy: Deg(45.0),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_colour: wgpu::Color,
    /// Directory relative texture paths are resolved against (native only).
    pub asset_root: PathBuf,
    pub camera: CameraConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "pc-diorama".to_string(),
            width: 1000,
            height: 800,
            clear_colour: wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 1.0,
            },
            asset_root: PathBuf::from("./"),
            camera: CameraConfig::default(),
        }
    }
}

impl Config {
    /// Defaults, with the asset root taken from `DIORAMA_ASSET_ROOT` when set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(ASSET_ROOT_VAR) {
            Ok(root) if !root.is_empty() => config.with_asset_root(root),
            _ => config,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_clear_colour(mut self, clear_colour: wgpu::Color) -> Self {
        self.clear_colour = clear_colour;
        self
    }

    pub fn with_asset_root<P: Into<PathBuf>>(mut self, asset_root: P) -> Self {
        self.asset_root = asset_root.into();
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }
}
