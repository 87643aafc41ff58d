// src/render/font.rs
// Manages loading the TrueType font and measuring/rasterizing text with SDL2_ttf.

use std::path::Path;

use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::ttf::{Font, Sdl2TtfContext};

use super::canvas::CardCanvas;
use super::TextRasterizer;
use crate::error::{Result, SeedError};

// Packed pixel formats are defined on native-endian u32s. These two lay their
// bytes out as R, G, B, A in memory, which is what the canvas blends from.
#[cfg(target_endian = "little")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::ABGR8888;
#[cfg(target_endian = "big")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::RGBA8888;

pub struct FontManager<'a, 'b> {
    #[allow(dead_code)] // ttf_context must be kept alive, but is not read directly.
    ttf_context: &'a Sdl2TtfContext,
    font: Font<'a, 'b>,
}

impl<'a, 'b> FontManager<'a, 'b> {
    pub fn new(ttf_context: &'a Sdl2TtfContext, font_path: &Path, font_size: u16) -> Result<Self> {
        let font = ttf_context
            .load_font(font_path, font_size)
            .map_err(|e| SeedError::Font(format!("{}: {}", font_path.display(), e)))?;
        log::debug!("Loaded font {} at {}pt", font_path.display(), font_size);
        Ok(FontManager { ttf_context, font })
    }
}

impl TextRasterizer for FontManager<'_, '_> {
    fn measure(&mut self, text: &str) -> Result<(u32, u32)> {
        self.font.size_of(text).map_err(|e| SeedError::Font(e.to_string()))
    }

    fn draw(&mut self, canvas: &mut CardCanvas, text: &str, x: i32, y: i32) -> Result<()> {
        // SDL_ttf refuses to render zero-width text; a blank card is already correct.
        if text.is_empty() {
            return Ok(());
        }

        let surface = self
            .font
            .render(text)
            .blended(Color::RGBA(0, 0, 0, 255))
            .map_err(|e| SeedError::Font(e.to_string()))?;
        let surface = surface.convert_format(RGBA_BYTES).map_err(SeedError::Font)?;

        let (width, height, pitch) = (surface.width(), surface.height(), surface.pitch() as usize);
        surface.with_lock(|pixels| canvas.blend_rgba(x, y, width, height, pitch, pixels));
        Ok(())
    }
}
