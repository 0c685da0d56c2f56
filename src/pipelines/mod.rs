//! Render pipeline construction.
//!
//! - `basic` builds the scene pipeline from `scene.wgsl`

pub mod basic;
