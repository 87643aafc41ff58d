// src/render/mod.rs
// Turns card fronts into images so the review app can show scripts its own text stack can't shape.

pub mod canvas;
pub mod font;

pub use self::canvas::CardCanvas;
pub use self::font::FontManager;

use std::fs;
use std::path::{Path, PathBuf};

use crate::debug::Tracer;
use crate::deck::CardRow;
use crate::error::{Result, SeedError};

/// Measures and draws text. `FontManager` is the real one; tests swap in a fake.
pub trait TextRasterizer {
    /// Width and height in pixels that `text` takes up when drawn.
    fn measure(&mut self, text: &str) -> Result<(u32, u32)>;
    /// Draws `text` in black with its top-left corner at (x, y).
    fn draw(&mut self, canvas: &mut CardCanvas, text: &str, x: i32, y: i32) -> Result<()>;
}

/// Path of the image for the row at `index` (zero-based). The populator builds
/// card fronts with this too, which is what keeps row i and image i together.
pub fn image_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("image{}.jpg", index))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub count: usize,
    pub width: u32,
    pub height: u32,
    pub output_dir: PathBuf,
}

pub struct ImageRenderer<'r> {
    rasterizer: &'r mut dyn TextRasterizer,
    output_dir: PathBuf,
}

impl<'r> ImageRenderer<'r> {
    pub fn new(rasterizer: &'r mut dyn TextRasterizer, output_dir: &Path) -> Self {
        ImageRenderer { rasterizer, output_dir: output_dir.to_path_buf() }
    }

    /// First pass: the widest and the tallest front in the batch.
    /// Every image shares this size so the review screen layout never shifts.
    pub fn measure_all(&mut self, rows: &[CardRow]) -> Result<(u32, u32)> {
        let _tracer = Tracer::new("Measure pass");
        let mut max_width = 0;
        let mut max_height = 0;

        for row in rows {
            let (width, height) = self.rasterizer.measure(&row.front)?;
            max_width = max_width.max(width);
            max_height = max_height.max(height);
        }

        Ok((max_width, max_height))
    }

    /// Draws one front centered on a white canvas of the given size.
    pub fn render_front(&mut self, text: &str, width: u32, height: u32) -> Result<CardCanvas> {
        let mut canvas = CardCanvas::new(width, height);
        let (text_width, text_height) = self.rasterizer.measure(text)?;

        let x = (i64::from(width) - i64::from(text_width)) / 2;
        let y = (i64::from(height) - i64::from(text_height)) / 2;
        self.rasterizer.draw(&mut canvas, text, x as i32, y as i32)?;

        Ok(canvas)
    }

    /// Measures every front, then renders each one to `image{i}.jpg` in the output directory.
    /// Stops at the first failure; images already written are left for the caller to clean up.
    pub fn render_all(&mut self, rows: &[CardRow]) -> Result<RenderSummary> {
        let (max_width, max_height) = self.measure_all(rows)?;
        // A JPEG can't be zero pixels wide, which is what a batch of empty fronts would measure.
        let (width, height) = (max_width.max(1), max_height.max(1));
        log::info!("Rendering {} card fronts at {}x{}", rows.len(), width, height);

        self.prepare_output_dir(rows.len())?;

        let _tracer = Tracer::new("Render pass");
        for (index, row) in rows.iter().enumerate() {
            let canvas = self.render_front(&row.front, width, height)?;
            if let Err(e) = canvas.save(&image_path(&self.output_dir, index)) {
                if let SeedError::MissingOutputDirectory(dir) = &e {
                    log::error!("{} doesn't exist, can't finish the image set", dir.display());
                }
                return Err(e);
            }
        }

        let shown = fs::canonicalize(&self.output_dir).unwrap_or_else(|_| self.output_dir.clone());
        log::info!("Images are here: {}", shown.display());

        Ok(RenderSummary {
            count: rows.len(),
            width,
            height,
            output_dir: self.output_dir.clone(),
        })
    }

    /// Creates the output directory, or reuses it with a warning. When reused, images
    /// numbered `count` and above belong to an earlier, longer batch and are removed so the
    /// directory holds exactly this batch. Other files are left alone.
    fn prepare_output_dir(&self, count: usize) -> Result<()> {
        if !self.output_dir.is_dir() {
            fs::create_dir_all(&self.output_dir)?;
            return Ok(());
        }

        log::warn!("{} already exists, images in it will be overwritten", self.output_dir.display());
        for entry in fs::read_dir(&self.output_dir)? {
            let path = entry?.path();
            let stale = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(image_index)
                .is_some_and(|index| index >= count);
            if stale && path.is_file() {
                log::debug!("Removing stale image {}", path.display());
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}

/// The row index in an `image{i}.jpg` file name, the inverse of `image_path`.
fn image_index(file_name: &str) -> Option<usize> {
    file_name.strip_prefix("image")?.strip_suffix(".jpg")?.parse().ok()
}
