pub mod bmp;
pub mod pixels;

pub use bmp::{decode_bmp, encode_bmp, read_bmp, write_bmp};
pub use pixels::{color_to_grayscale, PixelGrid};
