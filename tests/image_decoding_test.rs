mod common;

use crate::common::test_utils::{png_bytes, quad_image};
use image::{DynamicImage, GrayImage, ImageBuffer, LumaA, RgbaImage};
use pc_diorama::data_structures::texture::{DecodedImage, TextureError};

#[test]
fn rgb_images_are_expanded_to_rgba() {
    let decoded = DecodedImage::from_bytes(&png_bytes(&quad_image())).unwrap();

    assert_eq!(decoded.channels, 3);
    assert_eq!((decoded.width, decoded.height), (2, 2));
    assert_eq!(decoded.rgba.get_pixel(1, 1).0, [0, 255, 0, 255]);
}

#[test]
fn rows_are_flipped_vertically() {
    let decoded = DecodedImage::from_image(&quad_image()).unwrap();

    // the top row of the file ends up as the last row
    assert_eq!(decoded.rgba.get_pixel(0, 0).0, [0, 0, 255, 255]);
    assert_eq!(decoded.rgba.get_pixel(1, 0).0, [255, 255, 255, 255]);
    assert_eq!(decoded.rgba.get_pixel(0, 1).0, [255, 0, 0, 255]);
}

#[test]
fn rgba_images_keep_their_alpha() {
    let img = RgbaImage::from_pixel(3, 1, image::Rgba([10, 20, 30, 40]));

    let decoded = DecodedImage::from_bytes(&png_bytes(&DynamicImage::ImageRgba8(img))).unwrap();

    assert_eq!(decoded.channels, 4);
    assert_eq!(decoded.rgba.get_pixel(2, 0).0, [10, 20, 30, 40]);
}

#[test]
fn grayscale_images_are_rejected() {
    let img = DynamicImage::ImageLuma8(GrayImage::new(4, 4));

    let result = DecodedImage::from_bytes(&png_bytes(&img));

    assert!(matches!(result, Err(TextureError::UnsupportedChannels(1))));
}

#[test]
fn grayscale_alpha_images_are_rejected() {
    let img: ImageBuffer<LumaA<u8>, Vec<u8>> = ImageBuffer::new(4, 4);

    let result = DecodedImage::from_image(&DynamicImage::ImageLumaA8(img));

    assert!(matches!(result, Err(TextureError::UnsupportedChannels(2))));
}

#[test]
fn garbage_is_a_decode_error() {
    let result = DecodedImage::from_bytes(b"definitely not an image");

    assert!(matches!(result, Err(TextureError::Decode(_))));
}

#[test]
fn mip_chain_halves_down_to_one_pixel() {
    let img = RgbaImage::from_pixel(8, 2, image::Rgba([200, 100, 50, 255]));
    let decoded = DecodedImage::from_image(&DynamicImage::ImageRgba8(img)).unwrap();

    assert_eq!(decoded.mip_level_count(), 4);
    let sizes: Vec<(u32, u32)> = decoded
        .mip_chain()
        .iter()
        .map(|level| level.dimensions())
        .collect();
    assert_eq!(sizes, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
}

#[test]
fn single_pixel_has_one_mip_level() {
    let img = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 255]));
    let decoded = DecodedImage::from_image(&DynamicImage::ImageRgba8(img)).unwrap();

    assert_eq!(decoded.mip_level_count(), 1);
    assert_eq!(decoded.mip_chain().len(), 1);
}

#[test]
fn uniform_colour_survives_downsampling() {
    let img = RgbaImage::from_pixel(4, 4, image::Rgba([200, 100, 50, 255]));
    let decoded = DecodedImage::from_image(&DynamicImage::ImageRgba8(img)).unwrap();

    let chain = decoded.mip_chain();
    let last = chain.last().unwrap();

    assert_eq!(last.get_pixel(0, 0).0, [200, 100, 50, 255]);
}
