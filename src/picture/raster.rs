//! Decoded pixel grid for the fetched picture.

/// RGBA8 pixel grid, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Raster {
    /// Decode any supported format (PNG, JPEG) from raw bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        let pixels = decoded.pixels().map(|pixel| pixel.0).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a raster from raw RGBA8 rows. `pixels.len()` must equal
    /// `width * height`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Nearest-neighbour sample at fractional coordinates.
    ///
    /// `None` outside the grid, so callers can treat out-of-bounds as
    /// background.
    pub fn sample(&self, x: f64, y: f64) -> Option<[u8; 4]> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (col, row) = (x as u32, y as u32);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.pixels[(row as usize) * (self.width as usize) + col as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn two_by_two() -> Raster {
        Raster::from_rgba(2, 2, vec![RED, GREEN, BLUE, WHITE])
    }

    #[test]
    fn sample_is_nearest_neighbour() {
        let raster = two_by_two();
        assert_eq!(raster.sample(0.25, 0.25), Some(RED));
        assert_eq!(raster.sample(1.75, 0.25), Some(GREEN));
        assert_eq!(raster.sample(0.25, 1.75), Some(BLUE));
        assert_eq!(raster.sample(1.75, 1.75), Some(WHITE));
    }

    #[test]
    fn sample_outside_the_grid_is_none() {
        let raster = two_by_two();
        assert_eq!(raster.sample(-0.1, 0.5), None);
        assert_eq!(raster.sample(0.5, -0.1), None);
        assert_eq!(raster.sample(2.0, 0.5), None);
        assert_eq!(raster.sample(0.5, 2.0), None);
    }

    #[test]
    fn dimensions_come_from_construction() {
        let raster = two_by_two();
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
    }
}
