//! Test fixtures: encoded image blobs and junk data.

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

/// Encode a small solid-color PNG the decoder accepts.
pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Png)
}

/// Encode a small solid-color baseline JPEG.
pub fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Jpeg)
}

/// Bytes with a PNG extension-worthy name but no decodable image inside.
pub fn create_corrupted_image() -> Vec<u8> {
    b"this is not an image at all, just some text bytes".to_vec()
}

/// Plain text payload for non-image upload parts.
pub fn create_text_file() -> Vec<u8> {
    b"notes about the trip\n".to_vec()
}

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, format)
        .expect("encode fixture image");
    buf.into_inner()
}
