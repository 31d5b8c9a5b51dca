// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendered images and their PNG export.

use std::path::Path;

use tiny_skia::Pixmap;

use crate::color::Color;
use crate::error::Error;
use crate::geometry::Size;

/// An RGBA image with a transparent background.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    pixmap: Pixmap,
    scale: f32,
}

impl RasterImage {
    pub(crate) fn new(pixmap: Pixmap, scale: f32) -> Self {
        Self { pixmap, scale }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Pixels per layout unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Size in layout units.
    pub fn size(&self) -> Size {
        Size::new(
            self.width() as f32 / self.scale,
            self.height() as f32 / self.scale,
        )
    }

    /// Premultiplied RGBA bytes, row major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// The unpremultiplied color at pixel (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let pixel = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::from_rgba8(
            pixel.red(),
            pixel.green(),
            pixel.blue(),
            pixel.alpha(),
        ))
    }

    /// Returns `true` if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|pixel| pixel.alpha() == 0)
    }

    /// Encodes the image as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, Error> {
        self.pixmap
            .encode_png()
            .map_err(|err| Error::encode(err.to_string()))
    }

    /// Encodes the image as PNG and writes it to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let png = self.encode_png()?;
        std::fs::write(path, png).map_err(|err| Error::io(path.to_path_buf(), err))?;
        log::info!(
            "wrote {}x{} image to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}
