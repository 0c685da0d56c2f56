//! pc-diorama
//!
//! Renders a stylized desktop computer (case, fans, motherboard, GPU, RAM and a CPU
//! cooler) from a handful of primitive meshes, tagged textures and named materials.
//! The scene itself is plain data: a list of draw commands that is interpreted every
//! frame and pushed through a small set of named shader uniforms.
//!
//! High-level modules
//! - `camera`: fixed camera, projection and the camera uniform
//! - `config`: window, camera and asset configuration
//! - `context`: central GPU and window context that owns device/queue/surface
//! - `data_structures`: textures, materials, transforms, lights, meshes and scene records
//! - `desktop`: the desktop computer scene
//! - `flow`: the application event loop
//! - `manager`: texture/material registries and the per-draw shader state setters
//! - `pipelines`: the scene render pipeline and its shader
//! - `resources`: asset loading, the texture registry and primitive generation
//! - `render`: turns interpreted draws into GPU draw calls
//! - `shader`: named uniforms and their CPU/GPU representation
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod desktop;
pub mod flow;
pub mod manager;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod shader;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use wgpu;

pub use config::Config;
pub use manager::{DrawCall, SceneManager};
pub use shader::{ShaderUniforms, UniformBlock};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_web() -> Result<(), wasm_bindgen::JsValue> {
    flow::run(desktop::scene(), Config::default())
        .map_err(|e| wasm_bindgen::JsValue::from_str(&format!("{:#}", e)))
}
