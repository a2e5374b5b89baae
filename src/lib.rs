//! Image to colored ASCII art converter with HTML output.
//!
//! The pipeline runs strictly forward: [`SourceImage`] is averaged block by
//! block into a [`CellGrid`], which [`html`] writes out as a static page.
//!
//! ```no_run
//! use asciihtml::{Converter, SampleSize, SourceImage};
//!
//! let image = SourceImage::open("input.png")?;
//! let grid = Converter::new().with_sample_size(SampleSize::from_arg(10)).convert(&image);
//! asciihtml::html::render_to_file(&grid, "embedded.html")?;
//! # Ok::<(), asciihtml::AsciiHtmlError>(())
//! ```

pub mod html;
pub mod loader;
pub mod ramp;
pub mod sampler;

pub use loader::SourceImage;
pub use ramp::GlyphRamp;
pub use sampler::{BlockSampler, CellGrid, Grid, Region, RenderedCell, SampleSize};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsciiHtmlError {
    #[error("failed to read input image {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode input image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AsciiHtmlError>;

/// Block-averaging converter
#[derive(Debug, Clone)]
pub struct Converter {
    sample_size: SampleSize,
    ramp: GlyphRamp,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self { sample_size: SampleSize::default(), ramp: GlyphRamp::STANDARD }
    }

    pub fn with_sample_size(mut self, sample_size: SampleSize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_ramp(mut self, ramp: GlyphRamp) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn sample_size(&self) -> SampleSize {
        self.sample_size
    }

    pub fn convert(&self, image: &SourceImage) -> CellGrid {
        let grid = BlockSampler::new(image, self.sample_size).sample(&self.ramp);
        log::info!(
            "sampled {}x{} image into {}x{} cells (sample size {})",
            image.width(),
            image.height(),
            grid.width(),
            grid.height(),
            self.sample_size.get()
        );
        grid
    }
}
