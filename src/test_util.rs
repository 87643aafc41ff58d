// src/test_util.rs
// Helpers shared by the unit tests.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::render::canvas::CardCanvas;
use crate::render::TextRasterizer;

pub fn write_utf16_le(path: &Path, text: &str) {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}

pub fn write_utf16_be(path: &Path, text: &str) {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    fs::write(path, bytes).unwrap();
}

/// A monospace stand-in for a real font: every char is 10x20, each `\n` starts another
/// 20px line, and the measured box is drawn as a solid block.
pub struct BlockRasterizer {
    pub drawn: Vec<(String, i32, i32)>,
}

impl BlockRasterizer {
    pub const GLYPH_WIDTH: u32 = 10;
    pub const GLYPH_HEIGHT: u32 = 20;

    pub fn new() -> Self {
        BlockRasterizer { drawn: Vec::new() }
    }
}

impl TextRasterizer for BlockRasterizer {
    fn measure(&mut self, text: &str) -> Result<(u32, u32)> {
        let lines = text.split('\n');
        let widest = lines.clone().map(|line| line.chars().count()).max().unwrap_or(0);
        let height = lines.count() as u32 * Self::GLYPH_HEIGHT;
        Ok((widest as u32 * Self::GLYPH_WIDTH, height))
    }

    fn draw(&mut self, canvas: &mut CardCanvas, text: &str, x: i32, y: i32) -> Result<()> {
        let (width, height) = self.measure(text)?;
        let pixels = [0u8, 0, 0, 255].repeat((width * height) as usize);
        canvas.blend_rgba(x, y, width, height, width as usize * 4, &pixels);
        self.drawn.push((text.to_string(), x, y));
        Ok(())
    }
}
