//! Image loading and per-pixel channel normalization.

use crate::{AsciiHtmlError, Result};
use image::{DynamicImage, ImageBuffer, ImageReader, Rgb, Rgba, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Decoded raster image, widened to 16 bits per channel.
pub struct SourceImage {
    pixels: Rgba16Image,
}

impl SourceImage {
    /// Decode the file at `path`, guessing the format from its contents.
    ///
    /// The file handle is dropped before returning, on success and on failure.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source| AsciiHtmlError::ReadInput { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(read_err)?;
        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(read_err)?;
        // The file is open and sniffed; anything past here is bad content.
        let image = reader
            .decode()
            .map_err(|source| AsciiHtmlError::Decode { path: path.to_path_buf(), source })?;

        log::info!("opened {} ({}x{})", path.display(), image.width(), image.height());
        Ok(Self::from_dynamic(image))
    }

    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { pixels: image.into_rgba16() }
    }

    pub fn from_rgba8(image: RgbaImage) -> Self {
        Self::from_dynamic(DynamicImage::ImageRgba8(image))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// 8-bit color at (x, y). Panics outside `0..width` × `0..height`.
    pub fn at(&self, x: u32, y: u32) -> Rgb<u8> {
        normalize(*self.pixels.get_pixel(x, y))
    }
}

/// Premultiply color by alpha, then drop the low byte of each channel.
///
/// Opaque pixels keep their 8-bit value exactly; transparent ones read as black.
pub fn normalize(pixel: Rgba<u16>) -> Rgb<u8> {
    let [r, g, b, a] = pixel.0;
    let scale = |c: u16| ((u32::from(c) * u32::from(a) / 0xffff) >> 8) as u8;
    Rgb([scale(r), scale(g), scale(b)])
}
