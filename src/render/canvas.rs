// src/render/canvas.rs
// An in-memory white card that text gets blended onto before it's written out as a JPEG.

use std::io::ErrorKind;
use std::path::Path;

use image::{ImageError, ImageFormat, Rgb, RgbImage};

use crate::error::{Result, SeedError};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

pub struct CardCanvas {
    image: RgbImage,
}

impl CardCanvas {
    /// Creates a canvas filled with white.
    pub fn new(width: u32, height: u32) -> Self {
        CardCanvas { image: RgbImage::from_pixel(width, height, BACKGROUND) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    /// Alpha-blends a block of RGBA pixels onto the canvas with its top-left corner at (x, y).
    /// `pitch` is the number of bytes per source row, which can be wider than `width * 4`.
    /// Anything falling outside the canvas is clipped.
    pub fn blend_rgba(&mut self, x: i32, y: i32, width: u32, height: u32, pitch: usize, pixels: &[u8]) {
        for row in 0..height {
            let dst_y = i64::from(y) + i64::from(row);
            if dst_y < 0 || dst_y >= i64::from(self.height()) {
                continue;
            }
            for col in 0..width {
                let dst_x = i64::from(x) + i64::from(col);
                if dst_x < 0 || dst_x >= i64::from(self.width()) {
                    continue;
                }

                let offset = row as usize * pitch + col as usize * 4;
                let Some(src) = pixels.get(offset..offset + 4) else {
                    continue;
                };
                let alpha = u32::from(src[3]);
                if alpha == 0 {
                    continue;
                }

                let dst = self.image.get_pixel_mut(dst_x as u32, dst_y as u32);
                for channel in 0..3 {
                    let blended = u32::from(src[channel]) * alpha + u32::from(dst.0[channel]) * (255 - alpha);
                    dst.0[channel] = ((blended + 127) / 255) as u8;
                }
            }
        }
    }

    /// Writes the canvas as a JPEG. The directory has to exist already; if it
    /// has gone missing the run can't produce a complete image set, so that gets
    /// its own error instead of a generic IO one.
    pub fn save(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.is_dir() {
            return Err(SeedError::MissingOutputDirectory(dir.to_path_buf()));
        }

        match self.image.save_with_format(path, ImageFormat::Jpeg) {
            Err(ImageError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                Err(SeedError::MissingOutputDirectory(dir.to_path_buf()))
            }
            other => Ok(other?),
        }
    }
}
