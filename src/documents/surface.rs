//! Drawing collaborators

use std::path::PathBuf;

use crate::error::AppResult;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// How a piece of text is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn centered(font_size: f64) -> Self {
        Self {
            font_size,
            align: TextAlign::Center,
        }
    }
}

/// An image to draw, either a file or encoded PNG bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Png(Vec<u8>),
}

/// A paged document that can be drawn on (a PDF writer, usually).
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSurface: Send {
    fn add_page(&mut self) -> AppResult<()>;

    fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) -> AppResult<()>;

    fn image(&mut self, image: &ImageSource, x: f64, y: f64, width: f64) -> AppResult<()>;

    /// Stroke an SVG path
    fn stroke_path(&mut self, path: &str, line_width: f64) -> AppResult<()>;

    /// Finish the document. Nothing may be drawn afterwards.
    fn end(&mut self) -> AppResult<()>;
}

/// Renders scannable codes for start numbers
#[cfg_attr(test, mockall::automock)]
pub trait BarcodeGenerator: Send + Sync {
    /// PNG image encoding `value`
    fn render(&self, value: &str) -> AppResult<Vec<u8>>;
}
