use imgref::ImgRef;
use rgb::RGBA8;

/// In-memory pixel buffer: `height` rows of `width` [`RGBA8`] values,
/// row-major, top row first.
///
/// Dimensions are fixed at construction; the backing buffer is never
/// resized. `pixels.len() == width * height` always holds. A buffer
/// with either dimension zero is the "empty" value used by the driver
/// to reject degenerate decodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<RGBA8>,
}

impl Image {
    /// Create a `width` x `height` buffer filled with `fill`.
    pub fn new(width: usize, height: usize, fill: RGBA8) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// The 0x0 empty buffer.
    pub fn empty() -> Self {
        Self::new(0, 0, RGBA8::new(0, 0, 0, 255))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    /// If `x >= width` or `y >= height` — out-of-bounds access is a
    /// contract violation, not a recoverable error.
    pub fn pixel(&self, x: usize, y: usize) -> RGBA8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    /// If `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: RGBA8) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x] = color;
    }

    /// Row `y` as a contiguous slice of `width` pixels.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[RGBA8] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Mutable row `y`.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [RGBA8] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        &mut self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterate rows top to bottom.
    ///
    /// # Panics
    /// If the buffer has zero width.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, RGBA8> {
        self.pixels.chunks_exact(self.width)
    }

    /// Iterate mutable rows top to bottom.
    ///
    /// # Panics
    /// If the buffer has zero width.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, RGBA8> {
        self.pixels.chunks_exact_mut(self.width)
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// # Panics
    /// If the buffer has zero width.
    pub fn as_imgref(&self) -> ImgRef<'_, RGBA8> {
        ImgRef::new(&self.pixels, self.width, self.height)
    }
}
