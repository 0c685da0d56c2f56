//! Engine data structures: textures, materials, transforms, lights, meshes and scenes.
//!
//! - `texture` contains the GPU texture wrapper, image decoding and [`texture::TextureError`]
//! - `material` holds named surface materials and the first-match material registry
//! - `transform` holds per-draw scale/rotation/translation and the model matrix composer
//! - `light` holds point lights and their uniform layout
//! - `mesh` contains the vertex format, primitive kinds and uploaded meshes
//! - `scene` contains the declarative draw records a scene is made of

pub mod light;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod texture;
pub mod transform;
