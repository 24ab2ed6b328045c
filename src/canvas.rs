use thiserror::Error;

/// An opaque-overwrite color with four 8-bit channels.
///
/// The packed form puts alpha in the most significant byte:
/// `0xAA_RR_GG_BB`. This replaces the pointer-cast packing of a
/// `{b, g, r, a}` struct with an explicit, endianness-independent rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs the channels as `a<<24 | r<<16 | g<<8 | b`.
    #[must_use]
    pub const fn pack(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Inverse of [`Color::pack`].
    #[must_use]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
            a: (packed >> 24) as u8,
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// A fixed-size raster of packed colors, row-major.
///
/// The dimensions travel with the value; there are no global width/height
/// constants shared with the offset computation.
#[derive(Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    /// Creates a canvas filled with opaque white.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::WHITE.pack(); width * height],
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The packed pixel data, row-major, `width * height` cells.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    fn offset(&self, x: i32, y: i32) -> Result<usize, CanvasError> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(y as usize * self.width + x as usize)
    }

    /// Writes one pixel, unconditionally overwriting the previous value.
    ///
    /// Fails with [`CanvasError::OutOfBounds`] instead of writing when the
    /// coordinate is outside `[0, width) x [0, height)`.
    pub fn plot(&mut self, x: i32, y: i32, color: Color) -> Result<(), CanvasError> {
        let offset = self.offset(x, y)?;
        self.pixels[offset] = color.pack();
        Ok(())
    }

    /// Bounds-checked read of the packed value at `(x, y)`.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.offset(x, y).ok().map(|offset| self.pixels[offset])
    }

    /// Fills every cell with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.pack());
    }
}
