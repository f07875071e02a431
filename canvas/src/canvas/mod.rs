// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Canvas surfaces: pixel buffers that serialize to glyph-and-escape frames.
//!
//! Two implementations share one model: a pixel grid subdivided into
//! character cells of [BlockSize] subpixels, an overlay of directly-placed
//! characters that trump glyphs, and a [Canvas::frame] serializer built on
//! run-length escape emission.

// Attach sources.
pub mod blend;
pub mod fast;
pub mod frame;
pub mod glyph;

// Re-export.
pub use blend::*;
pub use fast::*;
pub use glyph::*;

use termcanvas_ansi_color::Color;

/// Subpixels per character cell, per axis. 2×4 for braille, 2×2 for
/// half-blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSize {
    pub x: usize,
    pub y: usize,
}

/// The operations every canvas offers the drawing context.
///
/// Coordinates are subpixels, `(0, 0)` top-left, y growing downward.
/// Out-of-bounds pixel operations are silent no-ops; the rasterizers lean on
/// this instead of pre-clipping every point.
pub trait Canvas {
    /// Width in subpixels (always a multiple of the block width).
    fn width(&self) -> usize;

    /// Height in subpixels (always a multiple of the block height).
    fn height(&self) -> usize;

    /// Resizes horizontally. The requested width is snapped *down* to a
    /// multiple of the block width, and all buffers are cleared.
    fn set_width(&mut self, width: usize);

    /// Resizes vertically, snapping down to a multiple of four subpixels
    /// (regardless of block height). All buffers are cleared.
    fn set_height(&mut self, height: usize);

    fn block_size(&self) -> BlockSize;

    /// Clears pixels, colors, and the character overlay.
    fn clear(&mut self);

    /// Lights the pixel and records its foreground color. `None` (or an
    /// invisible color) unlights instead.
    fn set_pixel(&mut self, x: i32, y: i32, color: Option<Color>);

    /// Records the background color for the pixel's position without
    /// touching the lit state.
    fn set_bg_pixel(&mut self, x: i32, y: i32, color: Option<Color>);

    /// Unlights the pixel and drops both of its colors.
    fn clear_pixel(&mut self, x: i32, y: i32) {
        self.set_pixel(x, y, None);
        self.set_bg_pixel(x, y, None);
    }

    /// Places `ch` directly into the character cell containing subpixel
    /// `(x, y)`. Overlay characters win over glyphs at frame time.
    fn set_character(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bg: Option<Color>);

    /// Serializes the canvas to glyphs and ANSI escapes, one terminal row
    /// per canvas cell row, joined by `delimiter`.
    fn frame(&self, delimiter: &str) -> String;
}

/// Probes the terminal for its size and converts it to subpixel dimensions.
/// Falls back to 40×20 cells when the probe fails (e.g. output is piped).
#[must_use]
pub fn max_canvas_size(block: BlockSize) -> (usize, usize) {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((40, 20));
    (cols as usize * block.x, rows as usize * block.y)
}

/// The cell bookkeeping shared by both canvases: snapped dimensions and the
/// character overlay.
#[derive(Debug, Clone)]
pub(crate) struct CellGrid {
    width: usize,
    height: usize,
    block: BlockSize,
    overlay: Vec<char>,
}

/// Overlay slots use NUL for "no character here".
const NO_OVERLAY: char = '\0';

impl CellGrid {
    pub fn new(block: BlockSize, width: usize, height: usize) -> Self {
        let mut it = Self {
            width: 0,
            height: 0,
            block,
            overlay: vec![],
        };
        it.resize(width, height);
        it
    }

    pub fn width(&self) -> usize { self.width }

    pub fn height(&self) -> usize { self.height }

    pub fn block(&self) -> BlockSize { self.block }

    pub fn cols(&self) -> usize { self.width / self.block.x }

    pub fn rows(&self) -> usize { self.height / self.block.y }

    pub fn cell_count(&self) -> usize { self.cols() * self.rows() }

    /// Snaps and stores new dimensions, reallocating the overlay. Width
    /// snaps down to the block width; height always snaps down to a multiple
    /// of 4, so all canvas variants agree on vertical sizing.
    pub fn resize(&mut self, width: usize, height: usize) {
        let snapped_w = width / self.block.x * self.block.x;
        let snapped_h = height / 4 * 4;
        if snapped_w != width || snapped_h != height {
            tracing::debug!(
                requested_w = width,
                requested_h = height,
                snapped_w,
                snapped_h,
                "canvas dimensions snapped to block grid"
            );
        }
        self.width = snapped_w;
        self.height = snapped_h;
        self.overlay = vec![NO_OVERLAY; self.cell_count()];
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// The cell index containing subpixel `(x, y)`, or `None` out of bounds.
    pub fn cell_index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let col = x as usize / self.block.x;
        let row = y as usize / self.block.y;
        Some(row * self.cols() + col)
    }

    pub fn clear_overlay(&mut self) { self.overlay.fill(NO_OVERLAY); }

    pub fn set_overlay(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.cell_index(x, y) {
            self.overlay[i] = ch;
        }
    }

    pub fn overlay_at(&self, cell: usize) -> Option<char> {
        match self.overlay.get(cell) {
            Some(&NO_OVERLAY) | None => None,
            Some(&ch) => Some(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    const BRAILLE_BLOCK: BlockSize = BlockSize { x: 2, y: 4 };

    #[test_case(91, 37, 90, 36; "odd both axes")]
    #[test_case(80, 40, 80, 40; "already aligned")]
    #[test_case(1, 3, 0, 0; "smaller than one cell")]
    fn dimensions_snap_down(w: usize, h: usize, expect_w: usize, expect_h: usize) {
        let grid = CellGrid::new(BRAILLE_BLOCK, w, h);
        assert_eq!((grid.width(), grid.height()), (expect_w, expect_h));
    }

    #[test]
    fn cell_indexing() {
        let grid = CellGrid::new(BRAILLE_BLOCK, 8, 8);
        // 4 cols × 2 rows of cells.
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cell_index(0, 0), Some(0));
        assert_eq!(grid.cell_index(1, 3), Some(0));
        assert_eq!(grid.cell_index(2, 0), Some(1));
        assert_eq!(grid.cell_index(0, 4), Some(4));
        assert_eq!(grid.cell_index(7, 7), Some(7));
        assert_eq!(grid.cell_index(8, 0), None);
        assert_eq!(grid.cell_index(-1, 0), None);
    }

    #[test]
    fn overlay_set_and_clear() {
        let mut grid = CellGrid::new(BRAILLE_BLOCK, 8, 8);
        grid.set_overlay(3, 5, 'x');
        assert_eq!(grid.overlay_at(5), Some('x'));
        assert_eq!(grid.overlay_at(0), None);
        // Out-of-bounds placement is dropped.
        grid.set_overlay(99, 0, 'y');
        grid.clear_overlay();
        assert_eq!(grid.overlay_at(5), None);
    }
}
