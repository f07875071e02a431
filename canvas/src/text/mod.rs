// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text rendering boundary.
//!
//! The drawing context does not rasterize fonts itself. Callers that want
//! pixel text implement [TextRasterizer] (e.g. backed by a bitmap font or a
//! TTF rasterizer) and register it in a [FontRegistry]; without one, text
//! falls back to placing characters directly into cells.

use std::collections::BTreeMap;
use std::fmt;

/// Horizontal anchoring of drawn text relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display,
         strum_macros::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A rasterized run of text.
///
/// `rows` is row-major, `height` rows of `width` values each: 0 for blank, 1
/// for an "on" pixel, 2 for an emphasized pixel (fonts may use it for e.g.
/// hinted stems; both 1 and 2 are drawn). The baseline sits `ascent` rows
/// below the top of the bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBitmap {
    pub rows: Vec<Vec<u8>>,
    pub width: usize,
    pub height: usize,
    pub ascent: i32,
    pub descent: i32,
    pub x_height: i32,
}

/// What `measure_text` reports. Mirrors the subset of Canvas-2D text metrics
/// that makes sense at terminal resolutions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
    pub x_height: f64,
}

/// Turns a string into a [TextBitmap] at a fixed pixel size.
pub trait TextRasterizer {
    fn rasterize(&self, text: &str) -> TextBitmap;

    /// The nominal pixel size (em height) this rasterizer renders at.
    fn pixel_size(&self) -> usize;
}

/// Named rasterizers, looked up by the context's current font name.
#[derive(Default)]
pub struct FontRegistry {
    fonts: BTreeMap<String, Box<dyn TextRasterizer>>,
}

impl FontRegistry {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Registers `rasterizer` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, rasterizer: Box<dyn TextRasterizer>) {
        self.fonts.insert(name.into(), rasterizer);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn TextRasterizer> {
        self.fonts.get(name).map(|b| &**b)
    }

    /// Registered font names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("fonts", &self.fonts.keys().collect::<Vec<_>>())
            .finish()
    }
}
