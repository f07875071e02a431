// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where fills and strokes land: the foreground (glyph) layer, the
//! background layer, or both.

use termcanvas_ansi_color::Color;

use crate::canvas::Canvas;

/// Routing of fill and stroke pixels to canvas layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum DrawMode {
    /// Everything goes to the glyph layer. The Canvas-2D default.
    #[default]
    Foreground,
    /// Everything goes to the background layer; glyphs stay untouched.
    Background,
    /// Every pixel is written to both layers.
    Both,
    /// Fills paint the background and *erase* the glyph layer beneath them;
    /// strokes paint the glyph layer. Gives solid shapes with crisp braille
    /// outlines.
    FillBgStrokeFg,
}

/// Writes one fill pixel according to `mode`.
pub(crate) fn fill_pixel(
    canvas: &mut dyn Canvas,
    mode: DrawMode,
    color: Option<Color>,
    x: i32,
    y: i32,
) {
    match mode {
        DrawMode::Foreground => canvas.set_pixel(x, y, color),
        DrawMode::Background => canvas.set_bg_pixel(x, y, color),
        DrawMode::Both => {
            canvas.set_pixel(x, y, color);
            canvas.set_bg_pixel(x, y, color);
        }
        DrawMode::FillBgStrokeFg => {
            canvas.set_pixel(x, y, None);
            canvas.set_bg_pixel(x, y, color);
        }
    }
}

/// Writes one stroke pixel according to `mode`.
pub(crate) fn stroke_pixel(
    canvas: &mut dyn Canvas,
    mode: DrawMode,
    color: Option<Color>,
    x: i32,
    y: i32,
) {
    match mode {
        DrawMode::Foreground | DrawMode::FillBgStrokeFg => canvas.set_pixel(x, y, color),
        DrawMode::Background => canvas.set_bg_pixel(x, y, color),
        DrawMode::Both => {
            canvas.set_pixel(x, y, color);
            canvas.set_bg_pixel(x, y, color);
        }
    }
}
