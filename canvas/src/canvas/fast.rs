// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [FastCanvas]: the cheap braille canvas.
//!
//! One bit per subpixel, one ANSI palette code per cell for each of
//! foreground and background. The last write to a cell wins; there is no
//! blending. This is the surface to reach for when redrawing every frame.

use termcanvas_ansi_color::{Color, ColorMode, ansi, code_to_escape, color_to_code};

use crate::canvas::{BlockSize, Canvas, CellGrid, frame::EscapeRun, glyph, max_canvas_size};

/// Subpixels per cell for braille rendering.
pub const BRAILLE_BLOCK: BlockSize = BlockSize { x: 2, y: 4 };

#[derive(Debug, Clone, Copy)]
pub struct FastCanvasOptions {
    /// The palette colors are quantized into. [ColorMode::Truecolor] has no
    /// per-cell palette code, so it behaves as [ColorMode::Ansi256] here.
    pub color_mode: ColorMode,
    /// Whether `frame` emits background escapes at all.
    pub use_background: bool,
}

impl Default for FastCanvasOptions {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Ansi16,
            use_background: true,
        }
    }
}

/// A braille canvas holding one dot bit per subpixel and one quantized color
/// code per cell half (foreground and background).
#[derive(Debug, Clone)]
pub struct FastCanvas {
    grid: CellGrid,
    /// Braille dot pattern per cell.
    dots: Vec<u8>,
    /// Foreground palette code per cell; [ansi::INVISIBLE] when unset.
    fg: Vec<i16>,
    /// Background palette code per cell.
    bg: Vec<i16>,
    /// The code the background buffer is reset to on [Canvas::clear].
    clear_background: i16,
    options: FastCanvasOptions,
}

impl FastCanvas {
    /// Creates a canvas of `width`×`height` subpixels. `None` dimensions are
    /// taken from the terminal size (40×20 cells when that is unavailable).
    /// Both dimensions snap down to whole cells.
    #[must_use]
    pub fn new(width: Option<usize>, height: Option<usize>, options: FastCanvasOptions) -> Self {
        let (max_w, max_h) = max_canvas_size(BRAILLE_BLOCK);
        let grid = CellGrid::new(
            BRAILLE_BLOCK,
            width.unwrap_or(max_w),
            height.unwrap_or(max_h),
        );
        let cells = grid.cell_count();
        Self {
            grid,
            dots: vec![0; cells],
            fg: vec![ansi::INVISIBLE; cells],
            bg: vec![ansi::INVISIBLE; cells],
            clear_background: ansi::INVISIBLE,
            options,
        }
    }

    /// Quantizes `color` into this canvas's palette.
    #[must_use]
    pub fn color_code(&self, color: Option<Color>) -> i16 {
        color_to_code(color, self.options.color_mode)
    }

    /// Sets the color the background buffer is filled with on
    /// [Canvas::clear] (and by the resize methods, which clear).
    pub fn set_background(&mut self, color: Option<Color>) {
        self.clear_background = self.color_code(color);
    }

    /// Lights the dot at `(x, y)` without touching colors.
    pub fn set(&mut self, x: i32, y: i32) {
        if let Some((cell, bit)) = self.dot_bit(x, y) {
            self.dots[cell] |= bit;
        }
    }

    /// Unlights the dot at `(x, y)`.
    pub fn unset(&mut self, x: i32, y: i32) {
        if let Some((cell, bit)) = self.dot_bit(x, y) {
            self.dots[cell] &= !bit;
        }
    }

    /// Flips the dot at `(x, y)`.
    pub fn toggle(&mut self, x: i32, y: i32) {
        if let Some((cell, bit)) = self.dot_bit(x, y) {
            self.dots[cell] ^= bit;
        }
    }

    /// Whether the dot at `(x, y)` is lit. Out-of-bounds dots read unlit.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.dot_bit(x, y)
            .is_some_and(|(cell, bit)| self.dots[cell] & bit != 0)
    }

    fn dot_bit(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let cell = self.grid.cell_index(x, y)?;
        let bit = glyph::BRAILLE_DOT[y as usize % BRAILLE_BLOCK.y][x as usize % BRAILLE_BLOCK.x];
        Some((cell, bit))
    }

    fn reset_buffers(&mut self) {
        let cells = self.grid.cell_count();
        self.dots = vec![0; cells];
        self.fg = vec![ansi::INVISIBLE; cells];
        self.bg = vec![self.clear_background; cells];
        self.grid.clear_overlay();
    }
}

impl Canvas for FastCanvas {
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
        let code = self.color_code(color);
        if code == ansi::INVISIBLE {
            self.unset(x, y);
            return;
        }
        if let Some(cell) = self.grid.cell_index(x, y) {
            self.fg[cell] = code;
            self.set(x, y);
        }
    }

    fn set_bg_pixel(&mut self, x: i32, y: i32, color: Option<Color>) {
        let code = self.color_code(color);
        if let Some(cell) = self.grid.cell_index(x, y) {
            self.bg[cell] = code;
        }
    }

    /// Unlights the dot but leaves the cell colors alone; a cleared dot in a
    /// colored cell keeps its neighbors' colors intact.
    fn clear_pixel(&mut self, x: i32, y: i32) { self.unset(x, y); }

    fn set_character(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bg: Option<Color>) {
        let Some(cell) = self.grid.cell_index(x, y) else {
            return;
        };
        self.grid.set_overlay(x, y, ch);
        if fg.is_some() {
            self.fg[cell] = self.color_code(fg);
        }
        if bg.is_some() {
            self.bg[cell] = self.color_code(bg);
        }
    }

    fn frame(&self, delimiter: &str) -> String {
        let mut out = String::new();
        let mut run = EscapeRun::new(self.options.use_background);
        let cols = self.grid.cols();
        for row in 0..self.grid.rows() {
            if row > 0 {
                out.push_str(delimiter);
            }
            for col in 0..cols {
                let cell = row * cols + col;
                run.push(
                    &mut out,
                    code_to_escape(self.fg[cell], false),
                    code_to_escape(self.bg[cell], true),
                );
                match self.grid.overlay_at(cell) {
                    Some(ch) => out.push(ch),
                    None => out.push(glyph::braille(self.dots[cell])),
                }
            }
            run.end_line(&mut out);
        }
        out
    }
}
