//! BMP reading and writing for the image harnesses.
//!
//! Decoding goes through the `image` crate, so any bitmap it understands is
//! accepted; output is always a 24-bit RGB bitmap.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageOutputFormat, Rgb, RgbImage};

use crate::codec::pixels::PixelGrid;
use crate::error::Result;

pub fn read_bmp(path: impl AsRef<Path>) -> Result<PixelGrid> {
    let bytes = std::fs::read(path)?;
    decode_bmp(&bytes)
}

pub fn decode_bmp(bytes: &[u8]) -> Result<PixelGrid> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Bmp)?;
    let rgb = img.to_rgb8();
    let pixels = rgb
        .pixels()
        .map(|p| ((p.0[0] as u32) << 16) | ((p.0[1] as u32) << 8) | p.0[2] as u32)
        .collect();
    PixelGrid::new(rgb.width(), rgb.height(), pixels)
}

pub fn write_bmp(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, encode_bmp(grid)?)?;
    Ok(())
}

pub fn encode_bmp(grid: &PixelGrid) -> Result<Vec<u8>> {
    let img = RgbImage::from_fn(grid.width, grid.height, |x, y| {
        let p = grid.get(x, y);
        Rgb([(p >> 16) as u8, (p >> 8) as u8, p as u8])
    });
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img).write_to(&mut buf, ImageOutputFormat::Bmp)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_keeps_pixels_in_row_order() {
        let grid = PixelGrid::new(3, 2, vec![0xFF0000, 0x00FF00, 0x0000FF, 0x123456, 0xFFFFFF, 0x000000]).unwrap();
        let bytes = encode_bmp(&grid).unwrap();
        assert_eq!(&bytes[..2], b"BM");
        assert_eq!(decode_bmp(&bytes).unwrap(), grid);
    }

    #[test]
    fn garbage_is_an_image_error() {
        assert!(matches!(decode_bmp(b"not a bitmap"), Err(crate::error::NetworkError::Image(_))));
    }
}
