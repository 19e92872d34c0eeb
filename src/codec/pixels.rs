use crate::error::{NetworkError, Result};

/// Colour samples are packed `0xRRGGBB`; the top byte is ignored.
pub const COLOR_MASK: u32 = 0x00FF_FFFF;

/// Packed colours are divided by this to land in `[0, 1)`.
pub const COLOR_SCALE: f64 = (1u32 << 24) as f64;

/// A rectangular grid of packed 24-bit colours, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<PixelGrid> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(NetworkError::shape("pixel grid", expected, pixels.len()));
        }
        Ok(PixelGrid { width, height, pixels })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn to_grayscale(&self) -> PixelGrid {
        PixelGrid {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| color_to_grayscale(p)).collect(),
        }
    }

    /// Row-major network input: each masked colour divided by `2^24`.
    pub fn to_input(&self) -> Vec<f64> {
        self.pixels.iter().map(|&p| (p & COLOR_MASK) as f64 / COLOR_SCALE).collect()
    }

    /// Rebuilds a grid from network output: each value times `2^24`,
    /// truncated toward zero and clamped to a valid colour.
    pub fn from_output(values: &[f64], width: u32, height: u32, grayscale: bool) -> Result<PixelGrid> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(NetworkError::shape("output vector for image", expected, values.len()));
        }
        let pixels = values
            .iter()
            .map(|&v| {
                let packed = (v * COLOR_SCALE).trunc().clamp(0.0, COLOR_MASK as f64) as u32;
                if grayscale { color_to_grayscale(packed) } else { packed }
            })
            .collect();
        Ok(PixelGrid { width, height, pixels })
    }
}

/// Luminance-weighted grey replicated into all three channels.
pub fn color_to_grayscale(rgb: u32) -> u32 {
    let r = ((rgb >> 16) & 0xFF) as f64;
    let g = ((rgb >> 8) & 0xFF) as f64;
    let b = (rgb & 0xFF) as f64;
    let gray = (0.3 * r + 0.589 * g + 0.11 * b).min(255.0) as u32;
    (gray << 16) | (gray << 8) | gray
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_masks_and_scales() {
        let grid = PixelGrid::new(2, 1, vec![0xFF00_0000, 0x0080_0000]).unwrap();
        assert_eq!(grid.to_input(), vec![0.0, 0.5]);
    }

    #[test]
    fn output_truncates_and_clamps() {
        let grid = PixelGrid::from_output(&[0.5, 1.0, -0.2, 0.99999999], 2, 2, false).unwrap();
        assert_eq!(grid.pixels[0], 0x0080_0000);
        assert_eq!(grid.pixels[1], COLOR_MASK);
        assert_eq!(grid.pixels[2], 0);
        assert_eq!(grid.pixels[3], (0.99999999 * COLOR_SCALE) as u32);
    }

    #[test]
    fn input_then_output_reproduces_colours() {
        let grid = PixelGrid::new(3, 1, vec![0x0012_3456, 0x00FF_FFFF, 0]).unwrap();
        let back = PixelGrid::from_output(&grid.to_input(), 3, 1, false).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn grayscale_replicates_channels() {
        assert_eq!(color_to_grayscale(0x00FF_FFFF), 0x00FE_FEFE);
        assert_eq!(color_to_grayscale(0), 0);
        let g = color_to_grayscale(0x0064_0000);
        assert_eq!(g, (30 << 16) | (30 << 8) | 30);
    }

    #[test]
    fn shape_checks() {
        assert!(PixelGrid::new(2, 2, vec![0; 3]).is_err());
        assert!(PixelGrid::from_output(&[0.1; 5], 2, 2, true).is_err());
    }
}
