//! GPU textures, image decoding and texture creation utilities.
//!
//! This module provides [`Texture`], a wrapper around WGPU texture resources,
//! [`DecodedImage`] for turning image files into upload-ready pixels and the
//! [`TextureError`] type shared by everything that loads textures.

use image::{DynamicImage, RgbaImage, imageops::FilterType};

/// Everything that can go wrong while turning an image file into a registered texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("could not read image file {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("not implemented to handle image with {0} channels")]
    UnsupportedChannels(u8),
    #[error("texture '{tag}' does not fit, all {limit} texture slots are taken")]
    SlotsExhausted { tag: String, limit: usize },
    #[error("a texture tagged '{0}' is already registered")]
    DuplicateTag(String),
}

/// Pixels of an image file, flipped vertically and expanded to RGBA.
///
/// Only 3 (RGB) and 4 (RGBA) channel sources are accepted. The original channel
/// count is kept for diagnostics.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub rgba: RgbaImage,
}

impl DecodedImage {
    /// Decode raw image file data (PNG, JPEG, etc.). The format is guessed from the content.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        let img = image::load_from_memory(bytes)?;
        Self::from_image(&img)
    }

    pub fn from_image(img: &DynamicImage) -> Result<Self, TextureError> {
        let channels = img.color().channel_count();
        if channels != 3 && channels != 4 {
            return Err(TextureError::UnsupportedChannels(channels));
        }
        // Image rows start at the top, texture coordinates at the bottom.
        let rgba = img.flipv().to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            channels,
            rgba,
        })
    }

    /// Number of levels in a full mip chain down to 1x1.
    pub fn mip_level_count(&self) -> u32 {
        32 - self.width.max(self.height).max(1).leading_zeros()
    }

    /// All mip levels, level 0 first. Each level halves the previous one.
    pub fn mip_chain(&self) -> Vec<RgbaImage> {
        let mut levels = Vec::with_capacity(self.mip_level_count() as usize);
        levels.push(self.rgba.clone());
        for _ in 1..self.mip_level_count() {
            let Some(previous) = levels.last() else {
                break;
            };
            let width = (previous.width() / 2).max(1);
            let height = (previous.height() / 2).max(1);
            let next = image::imageops::resize(previous, width, height, FilterType::Triangle);
            levels.push(next);
        }
        levels
    }
}

/// A GPU texture and its default view.
///
/// Textures are sampled through the shared sampler from [`create_default_sampler`].
/// Dropping a `Texture` releases its GPU memory.
#[derive(Clone, Debug)]
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl Texture {
    /// Standard depth buffer texture format (32-bit float).
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Colour format of every scene texture. Texels are sampled as stored, without
    /// sRGB decoding.
    pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    /// Create a depth texture for depth-testing during rendering.
    ///
    /// # Arguments
    ///
    /// * `size` is [width, height] of the texture in pixels
    /// * `label` is used as a debug label for the GPU resource
    pub fn create_depth_texture(device: &wgpu::Device, size: [u32; 2], label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: size[0].max(1),
            height: size[1].max(1),
            depth_or_array_layers: 1,
        };
        let desc = wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[Self::DEPTH_FORMAT],
        };
        let texture = device.create_texture(&desc);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view }
    }

    /// Create a 1x1 opaque white texture.
    ///
    /// Fills texture slots that have nothing registered so the slot bind group is always complete.
    pub fn create_fallback(device: &wgpu::Device, queue: &wgpu::Queue) -> Texture {
        let rgba = RgbaImage::from_pixel(1, 1, image::Rgba([255, 255, 255, 255]));
        let decoded = DecodedImage {
            width: 1,
            height: 1,
            channels: 4,
            rgba,
        };
        Self::from_decoded(device, queue, &decoded, Some("fallback texture"))
    }

    /// Upload decoded pixels together with a full mip chain.
    pub fn from_decoded(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        decoded: &DecodedImage,
        label: Option<&str>,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: decoded.width,
            height: decoded.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: decoded.mip_level_count(),
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::COLOR_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in decoded.mip_chain().iter().enumerate() {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    aspect: wgpu::TextureAspect::All,
                    texture: &texture,
                    mip_level: mip_level as u32,
                    origin: wgpu::Origin3d::ZERO,
                },
                level,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * level.width()),
                    rows_per_image: Some(level.height()),
                },
                wgpu::Extent3d {
                    width: level.width(),
                    height: level.height(),
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// Repeat-wrapped, linearly filtered sampler with linear mip blending.
pub fn create_default_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Linear,
        ..Default::default()
    })
}
