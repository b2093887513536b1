use crate::color::Color;

/// Row-major `height × width` grid of packed `0x00RRGGBB` pixels.
///
/// The host owns the buffer and lends it to the game for each `draw`.
/// Writes through [`FrameBuffer::plot`] outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_packed());
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes a single cell, silently skipping coordinates off the grid.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Number of cells currently holding `color`.
    pub fn count(&self, color: Color) -> usize {
        let packed = color.to_packed();
        self.pixels.iter().filter(|&&p| p == packed).count()
    }

    /// Expands into tightly packed RGB24 bytes for a streaming texture.
    pub fn write_rgb24(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.pixels.len() * 3);
        for (chunk, &pixel) in out.chunks_exact_mut(3).zip(self.pixels.iter()) {
            let (r, g, b) = Color::from_packed(pixel).rgb();
            chunk[0] = r;
            chunk[1] = g;
            chunk[2] = b;
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}
