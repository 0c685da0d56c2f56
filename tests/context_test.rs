use pc_diorama::{context::choose_surface_format, data_structures::texture::Texture};
use wgpu::TextureFormat;

#[test]
fn linear_surface_format_is_preferred() {
    let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];

    assert_eq!(choose_surface_format(&formats), Some(TextureFormat::Bgra8Unorm));
}

#[test]
fn srgb_only_surfaces_still_get_a_format() {
    let formats = [TextureFormat::Rgba8UnormSrgb];

    assert_eq!(choose_surface_format(&formats), Some(TextureFormat::Rgba8UnormSrgb));
    assert_eq!(choose_surface_format(&[]), None);
}

#[test]
fn textures_are_sampled_without_srgb_decoding() {
    assert!(!Texture::COLOR_FORMAT.is_srgb());
}
