//! Loading of external files and creation of GPU resources from them.
//!
//! - `texture` is the texture registry (tagged textures bound to slots)
//! - `primitives` generates the box, plane, cylinder, sphere and torus meshes

use std::path::Path;

pub mod primitives;
pub mod texture;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window available"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("page origin is not readable"))?;
    let base = reqwest::Url::parse(&format!("{}/", origin))?;
    Ok(base.join(file_name)?)
}

/// Read a whole asset file.
///
/// `file_name` is relative: on native targets it is resolved against `root`, on the
/// web against the page origin.
pub async fn load_binary(root: &Path, file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let _ = root;
        let url = format_url(file_name)?;
        reqwest::get(url).await?.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        let path = root.join(file_name);
        tokio::fs::read(&path)
            .await
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?
    };

    Ok(data)
}
