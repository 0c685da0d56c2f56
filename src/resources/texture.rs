//! The texture registry: tagged textures bound to numbered slots.
//!
//! Textures are registered in order and the registration index is the slot the
//! texture is bound to. Shaders select a texture by slot, scenes refer to them by tag.

use std::path::Path;

use crate::{
    data_structures::{
        scene::TextureSource,
        texture::{DecodedImage, Texture, TextureError},
    },
    resources::load_binary,
};

/// Number of texture slots the scene shader exposes.
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// Binding index of the shared sampler in the slot bind group.
pub const SAMPLER_BINDING: u32 = MAX_TEXTURE_SLOTS as u32;

/// A registered texture. Its slot is its position in the registry.
#[derive(Debug)]
pub struct TextureEntry<T> {
    pub tag: String,
    pub texture: T,
}

/// Tagged textures in registration order.
///
/// The registry owns its textures: releasing the registry (or calling
/// [`release_all`](Self::release_all)) frees every GPU handle it acquired.
#[derive(Debug)]
pub struct TextureRegistry<T = Texture> {
    entries: Vec<TextureEntry<T>>,
}

impl<T> Default for TextureRegistry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> TextureRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `texture` under `tag` in the next free slot and return that slot.
    pub fn insert(&mut self, tag: &str, texture: T) -> Result<usize, TextureError> {
        self.check_free(tag)?;
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            texture,
        });
        Ok(self.entries.len() - 1)
    }

    fn check_free(&self, tag: &str) -> Result<(), TextureError> {
        if self.slot_of(tag).is_some() {
            return Err(TextureError::DuplicateTag(tag.to_string()));
        }
        if self.entries.len() >= MAX_TEXTURE_SLOTS {
            return Err(TextureError::SlotsExhausted {
                tag: tag.to_string(),
                limit: MAX_TEXTURE_SLOTS,
            });
        }
        Ok(())
    }

    /// Slot of the texture registered under `tag`.
    pub fn slot_of(&self, tag: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.tag == tag)
    }

    /// The texture registered under `tag`.
    pub fn handle_of(&self, tag: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| &entry.texture)
    }

    pub fn get(&self, slot: usize) -> Option<&TextureEntry<T>> {
        self.entries.get(slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextureEntry<T>> {
        self.entries.iter()
    }

    /// Drop every registered texture and return how many were released.
    pub fn release_all(&mut self) -> usize {
        let released = self.entries.drain(..).count();
        log::debug!("Released {} textures", released);
        released
    }
}

impl TextureRegistry<Texture> {
    /// Read, decode and upload the image at `path` and register it under `tag`.
    ///
    /// Failures are logged and returned. Callers are free to ignore them: draws that
    /// reference a missing tag still render, just without the texture.
    pub async fn load(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        root: &Path,
        path: &str,
        tag: &str,
    ) -> Result<usize, TextureError> {
        let bytes = load_binary(root, path).await;
        self.register_bytes(device, queue, bytes, path, tag)
    }

    /// Load all `sources`, fetching the files concurrently.
    ///
    /// Registration still happens in the order of `sources`, so slots are stable.
    /// Returns the number of textures that were registered.
    pub async fn load_all(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        root: &Path,
        sources: &[TextureSource],
    ) -> usize {
        let reads = sources.iter().map(|source| load_binary(root, &source.path));
        let files = futures::future::join_all(reads).await;
        sources
            .iter()
            .zip(files)
            .filter_map(|(source, bytes)| {
                self.register_bytes(device, queue, bytes, &source.path, &source.tag)
                    .ok()
            })
            .count()
    }

    fn register_bytes(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: anyhow::Result<Vec<u8>>,
        path: &str,
        tag: &str,
    ) -> Result<usize, TextureError> {
        let result = bytes
            .map_err(|e| TextureError::Io {
                path: path.to_string(),
                reason: format!("{e:#}"),
            })
            .and_then(|bytes| self.load_bytes(device, queue, &bytes, path, tag));
        if let Err(e) = &result {
            log::error!("Could not load image {}: {}", path, e);
        }
        result
    }

    /// Decode and upload image file contents and register them under `tag`.
    pub fn load_bytes(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
        tag: &str,
    ) -> Result<usize, TextureError> {
        // Fail before touching the GPU.
        self.check_free(tag)?;
        let decoded = DecodedImage::from_bytes(bytes)?;
        log::info!(
            "Successfully loaded image: {}, width: {}, height: {}, channels: {}",
            label,
            decoded.width,
            decoded.height,
            decoded.channels
        );
        let texture = Texture::from_decoded(device, queue, &decoded, Some(label));
        self.insert(tag, texture)
    }

    /// Bind every registered texture to its slot.
    ///
    /// Slots without a texture are filled with `fallback` so the bind group always
    /// matches [`texture_slots_layout`].
    pub fn bind_all(
        &self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        fallback: &Texture,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        let mut entries: Vec<wgpu::BindGroupEntry> = (0..MAX_TEXTURE_SLOTS)
            .map(|slot| {
                let texture = self.get(slot).map_or(fallback, |entry| &entry.texture);
                wgpu::BindGroupEntry {
                    binding: slot as u32,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                }
            })
            .collect();
        entries.push(wgpu::BindGroupEntry {
            binding: SAMPLER_BINDING,
            resource: wgpu::BindingResource::Sampler(sampler),
        });

        device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &entries,
            label: Some("texture_slots_bind_group"),
        })
    }
}

/// Layout of the slot bind group: one 2D texture per slot plus a shared sampler.
pub fn texture_slots_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let mut entries: Vec<wgpu::BindGroupLayoutEntry> = (0..MAX_TEXTURE_SLOTS as u32)
        .map(|binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                multisampled: false,
                view_dimension: wgpu::TextureViewDimension::D2,
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
            },
            count: None,
        })
        .collect();
    entries.push(wgpu::BindGroupLayoutEntry {
        binding: SAMPLER_BINDING,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    });

    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &entries,
        label: Some("texture_slots_bind_group_layout"),
    })
}
