// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [BlendCanvas]: the full-color canvas.
//!
//! Every subpixel carries a packed RGBA value; at frame time each cell's
//! color is the alpha-weighted mean of its subpixels, and a subpixel is
//! considered lit when its alpha exceeds half. Renders as braille (2×4,
//! [BlendCanvas::smooth]) or half-blocks (2×2, [BlendCanvas::block]).

use termcanvas_ansi_color::{Color, ColorMode, color_to_escape};

use crate::canvas::{BlockSize, Canvas, CellGrid, frame::EscapeRun, glyph, max_canvas_size};

/// Subpixels per cell for half-block rendering.
pub const HALF_BLOCK_BLOCK: BlockSize = BlockSize { x: 2, y: 2 };

/// Which glyph table a [BlendCanvas] renders through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphTable {
    /// Braille dots, 2×4 subpixels per cell.
    Braille,
    /// Quadrant half-blocks, 2×2 subpixels per cell.
    HalfBlock,
}

#[derive(Debug, Clone, Copy)]
pub struct BlendCanvasOptions {
    pub color_mode: ColorMode,
}

impl Default for BlendCanvasOptions {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Ansi16,
        }
    }
}

/// Alpha threshold above which a subpixel counts as lit for glyph selection.
const LIT_ALPHA: u32 = 127;

/// Opaque black, the default clear background.
const OPAQUE_BLACK: u32 = 0x0000_00FF;

/// A canvas with one packed RGBA value per subpixel, for both foreground and
/// background, blended down to one color pair per cell at frame time.
#[derive(Debug, Clone)]
pub struct BlendCanvas {
    grid: CellGrid,
    table: GlyphTable,
    /// Packed `0xRRGGBBAA` per subpixel.
    fg: Vec<u32>,
    bg: Vec<u32>,
    clear_background: u32,
    options: BlendCanvasOptions,
}

impl BlendCanvas {
    /// A braille-rendered blend canvas. `None` dimensions come from the
    /// terminal size.
    #[must_use]
    pub fn smooth(width: Option<usize>, height: Option<usize>, options: BlendCanvasOptions) -> Self {
        Self::with_strategy(
            crate::canvas::BRAILLE_BLOCK,
            GlyphTable::Braille,
            width,
            height,
            options,
        )
    }

    /// A half-block-rendered blend canvas: coarser, but square-ish subpixels
    /// and per-quadrant color weighting.
    #[must_use]
    pub fn block(width: Option<usize>, height: Option<usize>, options: BlendCanvasOptions) -> Self {
        Self::with_strategy(
            HALF_BLOCK_BLOCK,
            GlyphTable::HalfBlock,
            width,
            height,
            options,
        )
    }

    fn with_strategy(
        block: BlockSize,
        table: GlyphTable,
        width: Option<usize>,
        height: Option<usize>,
        options: BlendCanvasOptions,
    ) -> Self {
        let (max_w, max_h) = max_canvas_size(block);
        let grid = CellGrid::new(block, width.unwrap_or(max_w), height.unwrap_or(max_h));
        let pixels = grid.width() * grid.height();
        Self {
            grid,
            table,
            fg: vec![0; pixels],
            bg: vec![OPAQUE_BLACK; pixels],
            clear_background: OPAQUE_BLACK,
            options,
        }
    }

    /// Sets the color the background buffer is filled with on
    /// [Canvas::clear]. `None` restores the default (opaque black).
    pub fn set_background(&mut self, color: Option<Color>) {
        self.clear_background = match color {
            None => OPAQUE_BLACK,
            Some(c) => pack(c, 0xFF),
        };
    }

    /// Writes a raw RGBA subpixel to the foreground buffer. This is the
    /// entry point for translucent drawing; [Canvas::set_pixel] is the
    /// opaque shorthand.
    pub fn set_rgba(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8, a: u8) {
        if let Some(i) = self.pixel_index(x, y) {
            self.fg[i] =
                (u32::from(r) << 24) | (u32::from(g) << 16) | (u32::from(b) << 8) | u32::from(a);
        }
    }

    /// The packed foreground RGBA at `(x, y)`; 0 when out of bounds.
    #[must_use]
    pub fn rgba(&self, x: i32, y: i32) -> u32 {
        self.pixel_index(x, y).map_or(0, |i| self.fg[i])
    }

    fn pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        if self.grid.in_bounds(x, y) {
            Some(y as usize * self.grid.width() + x as usize)
        } else {
            None
        }
    }

    fn reset_buffers(&mut self) {
        let pixels = self.grid.width() * self.grid.height();
        self.fg = vec![0; pixels];
        self.bg = vec![self.clear_background; pixels];
        self.grid.clear_overlay();
    }

    /// Fills every subpixel of the cell containing `(x, y)` in the given
    /// buffer. Used by `set_character` so the cell reads as one solid color.
    fn flood_cell(&mut self, x: i32, y: i32, value: u32, background: bool) {
        let block = self.grid.block();
        let col = (x as usize / block.x) * block.x;
        let row = (y as usize / block.y) * block.y;
        for yy in 0..block.y {
            for xx in 0..block.x {
                let i = (row + yy) * self.grid.width() + col + xx;
                if background {
                    self.bg[i] = value;
                } else {
                    self.fg[i] = value;
                }
            }
        }
    }

    /// The alpha-weighted mean color of one cell in one buffer, or `None`
    /// when the cell is fully transparent.
    fn mean_color(&self, buf: &[u32], cell_col: usize, cell_row: usize) -> Option<Color> {
        let block = self.grid.block();
        let (mut r, mut g, mut b, mut alpha) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        for yy in 0..block.y {
            for xx in 0..block.x {
                let i = (cell_row * block.y + yy) * self.grid.width() + cell_col * block.x + xx;
                let v = buf[i];
                r += f64::from((v >> 24) & 0xFF);
                g += f64::from((v >> 16) & 0xFF);
                b += f64::from((v >> 8) & 0xFF);
                alpha += f64::from(v & 0xFF);
            }
        }
        if alpha == 0.0 {
            return None;
        }
        let weight = alpha / 255.0;
        let channel = |sum: f64| (sum / weight).floor().min(255.0) as u8;
        Some(Color::Rgb(channel(r), channel(g), channel(b)))
    }

    /// Glyph bit pattern for one cell: a bit per subpixel whose foreground
    /// alpha exceeds [LIT_ALPHA].
    fn glyph_bits(&self, cell_col: usize, cell_row: usize) -> u8 {
        let block = self.grid.block();
        let mut bits = 0u8;
        for yy in 0..block.y {
            for xx in 0..block.x {
                let i = (cell_row * block.y + yy) * self.grid.width() + cell_col * block.x + xx;
                if self.fg[i] & 0xFF > LIT_ALPHA {
                    bits |= match self.table {
                        GlyphTable::Braille => glyph::BRAILLE_DOT[yy][xx],
                        GlyphTable::HalfBlock => glyph::QUADRANT_BIT[yy][xx],
                    };
                }
            }
        }
        bits
    }
}

/// Packs a [Color] with the given alpha. ANSI palette indices are resolved
/// to their conventional RGB values first.
fn pack(color: Color, alpha: u8) -> u32 {
    let (r, g, b) = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Ansi(code) => ansi_code_rgb(code),
    };
    (u32::from(r) << 24) | (u32::from(g) << 16) | (u32::from(b) << 8) | u32::from(alpha)
}

/// The conventional xterm RGB value of an ANSI palette index. Out-of-range
/// codes resolve to black.
fn ansi_code_rgb(code: i16) -> (u8, u8, u8) {
    #[rustfmt::skip]
    const BASE_16: [(u8, u8, u8); 16] = [
        (0, 0, 0), (128, 0, 0), (0, 128, 0), (128, 128, 0),
        (0, 0, 128), (128, 0, 128), (0, 128, 128), (192, 192, 192),
        (128, 128, 128), (255, 0, 0), (0, 255, 0), (255, 255, 0),
        (0, 0, 255), (255, 0, 255), (0, 255, 255), (255, 255, 255),
    ];
    match code {
        0..=15 => BASE_16[code as usize],
        16..=231 => {
            let n = code - 16;
            let level = |v: i16| -> u8 {
                if v == 0 { 0 } else { (55 + 40 * v) as u8 }
            };
            (level(n / 36), level(n / 6 % 6), level(n % 6))
        }
        232..=255 => {
            let v = (8 + 10 * (code - 232)) as u8;
            (v, v, v)
        }
        _ => (0, 0, 0),
    }
}

impl Canvas for BlendCanvas {
    fn width(&self) -> usize { self.grid.width() }

    fn height(&self) -> usize { self.grid.height() }

    fn set_width(&mut self, width: usize) {
        self.grid.resize(width, self.grid.height());
        self.reset_buffers();
    }

    fn set_height(&mut self, height: usize) {
        self.grid.resize(self.grid.width(), height);
        self.reset_buffers();
    }

    fn block_size(&self) -> BlockSize { self.grid.block() }

    fn clear(&mut self) { self.reset_buffers(); }

    fn set_pixel(&mut self, x: i32, y: i32, color: Option<Color>) {
        if let Some(i) = self.pixel_index(x, y) {
            self.fg[i] = match color {
                None => 0,
                Some(c) => pack(c, 0xFF),
            };
        }
    }

    fn set_bg_pixel(&mut self, x: i32, y: i32, color: Option<Color>) {
        if let Some(i) = self.pixel_index(x, y) {
            self.bg[i] = match color {
                None => 0,
                Some(c) => pack(c, 0xFF),
            };
        }
    }

    fn set_character(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bg: Option<Color>) {
        if !self.grid.in_bounds(x, y) {
            return;
        }
        self.grid.set_overlay(x, y, ch);
        if let Some(c) = fg {
            self.flood_cell(x, y, pack(c, 0xFF), false);
        }
        if let Some(c) = bg {
            self.flood_cell(x, y, pack(c, 0xFF), true);
        }
    }

    fn frame(&self, delimiter: &str) -> String {
        let mut out = String::new();
        let mut run = EscapeRun::new(true);
        let cols = self.grid.cols();
        let mode = self.options.color_mode;
        for row in 0..self.grid.rows() {
            if row > 0 {
                out.push_str(delimiter);
            }
            for col in 0..cols {
                let fg = self.mean_color(&self.fg, col, row);
                let bg = self.mean_color(&self.bg, col, row);
                run.push(
                    &mut out,
                    color_to_escape(fg, mode, false),
                    color_to_escape(bg, mode, true),
                );
                match self.grid.overlay_at(row * cols + col) {
                    Some(ch) => out.push(ch),
                    None => {
                        let bits = self.glyph_bits(col, row);
                        out.push(match self.table {
                            GlyphTable::Braille => glyph::braille(bits),
                            GlyphTable::HalfBlock => glyph::half_block(bits),
                        });
                    }
                }
            }
            run.end_line(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn smooth(w: usize, h: usize) -> BlendCanvas {
        BlendCanvas::smooth(
            Some(w),
            Some(h),
            BlendCanvasOptions {
                color_mode: ColorMode::Truecolor,
            },
        )
    }

    fn block(w: usize, h: usize) -> BlendCanvas {
        BlendCanvas::block(
            Some(w),
            Some(h),
            BlendCanvasOptions {
                color_mode: ColorMode::Truecolor,
            },
        )
    }

    const BG_BLACK: &str = "\x1b[48;2;0;0;0m";

    #[test]
    fn empty_frame_has_black_background() {
        let c = smooth(4, 4);
        assert_eq!(c.frame("\n"), format!("{BG_BLACK}  \x1b[0m"));
    }

    #[test]
    fn full_cell_renders_full_braille_glyph() {
        let mut c = smooth(4, 4);
        for y in 0..4 {
            for x in 0..2 {
                c.set_pixel(x, y, Some(Color::Rgb(255, 0, 0)));
            }
        }
        assert_eq!(
            c.frame("\n"),
            format!("\x1b[38;2;255;0;0m{BG_BLACK}⣿\x1b[39m \x1b[0m")
        );
    }

    #[test]
    fn cell_color_is_mean_of_lit_subpixels() {
        let mut c = smooth(4, 4);
        // Half the cell red, half blue; transparent subpixels don't dilute.
        for y in 0..2 {
            for x in 0..2 {
                c.set_pixel(x, y, Some(Color::Rgb(255, 0, 0)));
            }
        }
        for y in 2..4 {
            for x in 0..2 {
                c.set_pixel(x, y, Some(Color::Rgb(0, 0, 255)));
            }
        }
        assert!(c.frame("\n").contains("\x1b[38;2;127;0;127m"));
    }

    #[test]
    fn translucent_subpixel_tints_but_does_not_light() {
        let mut c = smooth(4, 4);
        c.set_rgba(0, 0, 255, 0, 0, 100);
        let frame = c.frame("\n");
        // Alpha 100 is below the lit threshold: no glyph.
        assert!(!frame.contains('⠁'));
        // But the cell still reads red: 255 / (100/255) = 650, clamped.
        assert!(frame.contains("\x1b[38;2;255;0;0m"));
    }

    #[test]
    fn lit_threshold_is_half_alpha() {
        let mut c = smooth(4, 4);
        c.set_rgba(0, 0, 255, 255, 255, 128);
        assert!(c.frame("\n").contains('⠁'));
    }

    #[test_case(0, 0, '▘')]
    #[test_case(1, 0, '▝')]
    #[test_case(0, 1, '▖')]
    #[test_case(1, 1, '▗')]
    fn block_canvas_quadrants(x: i32, y: i32, expected: char) {
        let mut c = block(2, 4);
        c.set_pixel(x, y, Some(Color::Rgb(255, 255, 255)));
        assert!(c.frame("\n").contains(expected));
    }

    #[test]
    fn block_canvas_full_cell() {
        let mut c = block(2, 4);
        for y in 0..2 {
            for x in 0..2 {
                c.set_pixel(x, y, Some(Color::Rgb(255, 255, 255)));
            }
        }
        assert!(c.frame("\n").contains('█'));
    }

    #[test]
    fn ansi_palette_colors_resolve_to_rgb() {
        let mut c = smooth(4, 4);
        c.set_pixel(0, 0, Some(Color::Ansi(9)));
        assert!(c.frame("\n").contains("\x1b[38;2;255;0;0m"));
        c.set_pixel(0, 0, Some(Color::Ansi(196)));
        assert!(c.frame("\n").contains("\x1b[38;2;255;0;0m"));
        c.set_pixel(0, 0, Some(Color::Ansi(244)));
        assert!(c.frame("\n").contains("\x1b[38;2;128;128;128m"));
    }

    #[test]
    fn custom_background_applies_on_clear() {
        let mut c = smooth(4, 4);
        c.set_background(Some(Color::Rgb(0, 64, 0)));
        c.clear();
        assert!(c.frame("\n").contains("\x1b[48;2;0;64;0m"));
    }

    #[test]
    fn overlay_character_wins() {
        let mut c = smooth(4, 4);
        c.set_character(0, 0, 'Z', Some(Color::Rgb(0, 255, 0)), None);
        let frame = c.frame("\n");
        assert!(frame.contains('Z'));
        assert!(frame.contains("\x1b[38;2;0;255;0m"));
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut c = smooth(4, 4);
        c.set_pixel(-1, 0, Some(Color::Rgb(255, 0, 0)));
        c.set_pixel(4, 0, Some(Color::Rgb(255, 0, 0)));
        c.set_rgba(0, 100, 1, 2, 3, 4);
        assert_eq!(c.frame("\n"), format!("{BG_BLACK}  \x1b[0m"));
    }

    #[test]
    fn xterm_cube_levels() {
        assert_eq!(ansi_code_rgb(16), (0, 0, 0));
        assert_eq!(ansi_code_rgb(231), (255, 255, 255));
        assert_eq!(ansi_code_rgb(21), (0, 0, 255));
        assert_eq!(ansi_code_rgb(-1), (0, 0, 0));
    }
}
