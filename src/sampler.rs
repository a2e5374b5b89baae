//! Block sampling - splits the image into S×S blocks and averages each one.

use crate::loader::SourceImage;
use crate::ramp::GlyphRamp;
use image::Rgb;
use std::num::NonZeroU32;

/// Edge length, in source pixels, of one averaged block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSize(NonZeroU32);

impl SampleSize {
    pub const DEFAULT: SampleSize = match NonZeroU32::new(15) {
        Some(n) => SampleSize(n),
        None => unreachable!(),
    };

    pub fn new(size: u32) -> Option<Self> {
        NonZeroU32::new(size).map(Self)
    }

    /// Positive values override the default, anything else keeps it.
    ///
    /// Values past `u32::MAX` saturate; any size at or above the image
    /// dimensions already yields a single cell.
    pub fn from_arg(value: i64) -> Self {
        if value <= 0 {
            log::debug!("ignoring sample size {}, using {}", value, Self::DEFAULT.get());
            return Self::DEFAULT;
        }
        let size = u32::try_from(value).unwrap_or(u32::MAX);
        Self::new(size).unwrap_or(Self::DEFAULT)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for SampleSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Half-open pixel rectangle `[start_x, end_x) × [start_y, end_y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start_x: u32,
    pub start_y: u32,
    pub end_x: u32,
    pub end_y: u32,
}

impl Region {
    pub fn area(&self) -> u64 {
        u64::from(self.end_x - self.start_x) * u64::from(self.end_y - self.start_y)
    }
}

/// Cell layout for an image of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    image_width: u32,
    image_height: u32,
    sample_size: u32,
}

impl Grid {
    pub fn new(image_width: u32, image_height: u32, sample_size: SampleSize) -> Self {
        let s = sample_size.get();
        Self {
            width: image_width.div_ceil(s),
            height: image_height.div_ceil(s),
            image_width,
            image_height,
            sample_size: s,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Source pixels covered by cell (x, y); edge cells are clipped to the image.
    pub fn region(&self, x: u32, y: u32) -> Region {
        let s = self.sample_size;
        Region {
            start_x: x * s,
            start_y: y * s,
            end_x: (x + 1).saturating_mul(s).min(self.image_width),
            end_y: (y + 1).saturating_mul(s).min(self.image_height),
        }
    }

    /// Cell coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}

/// One output character and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedCell {
    pub glyph: char,
    pub color: Rgb<u8>,
}

/// Row-major cells of a sampled image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cells: Vec<RenderedCell>,
}

impl CellGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[RenderedCell] {
        &self.cells
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&RenderedCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[RenderedCell]> {
        // chunks_exact panics on 0
        self.cells.chunks_exact(self.width.max(1) as usize)
    }
}

pub struct BlockSampler<'a> {
    image: &'a SourceImage,
    grid: Grid,
}

impl<'a> BlockSampler<'a> {
    pub fn new(image: &'a SourceImage, sample_size: SampleSize) -> Self {
        let grid = Grid::new(image.width(), image.height(), sample_size);
        Self { image, grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mean color of cell (x, y), each channel sum truncated by the pixel count.
    pub fn average(&self, x: u32, y: u32) -> Rgb<u8> {
        let region = self.grid.region(x, y);
        let mut sum = [0u64; 3];
        for py in region.start_y..region.end_y {
            for px in region.start_x..region.end_x {
                let Rgb(rgb) = self.image.at(px, py);
                for (acc, c) in sum.iter_mut().zip(rgb) {
                    *acc += u64::from(c);
                }
            }
        }
        let area = region.area();
        Rgb(sum.map(|total| (total / area) as u8))
    }

    pub fn sample(&self, ramp: &GlyphRamp) -> CellGrid {
        let cells = self
            .grid
            .cells()
            .map(|(x, y)| {
                let color = self.average(x, y);
                let glyph = ramp.glyph_for(GlyphRamp::brightness(color.0));
                RenderedCell { glyph, color }
            })
            .collect();
        CellGrid { width: self.grid.width, height: self.grid.height, cells }
    }
}
