// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cell-level snapshots: `get_image_data` / `put_image_data`.
//!
//! A terminal canvas's "image data" is its glyphs, not raw pixels. Snapshots
//! are taken at cell granularity with escapes stripped, and pasted back as
//! overlay characters. Like its Canvas-2D namesake, `put_image_data` ignores
//! the current transform.

use crate::context::drawing_context::Context;

/// A rectangular block of cells captured from a canvas frame. `width` and
/// `height` are in cells; every row holds exactly `width` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub rows: Vec<String>,
    pub width: usize,
    pub height: usize,
}

impl Context<'_> {
    /// Captures the cells covering the subpixel rectangle `[x, x+w) ×
    /// [y, y+h)`. Coordinates snap down to whole cells; regions reaching
    /// past the canvas come back space-padded.
    #[must_use]
    pub fn get_image_data(&self, x: f64, y: f64, w: f64, h: f64) -> ImageData {
        let block = self.block_size();
        let col0 = (x.max(0.0) / block.x as f64).floor() as usize;
        let row0 = (y.max(0.0) / block.y as f64).floor() as usize;
        let cols = (w.max(0.0) / block.x as f64).floor() as usize;
        let rows_wanted = (h.max(0.0) / block.y as f64).floor() as usize;

        let frame = self.frame();
        let lines: Vec<Vec<char>> = frame
            .lines()
            .map(|line| strip_escapes(line).chars().collect())
            .collect();

        let mut rows = Vec::with_capacity(rows_wanted);
        for r in 0..rows_wanted {
            let mut out = String::with_capacity(cols);
            let line = lines.get(row0 + r);
            for c in 0..cols {
                let ch = line.and_then(|l| l.get(col0 + c)).copied().unwrap_or(' ');
                out.push(ch);
            }
            rows.push(out);
        }
        ImageData {
            rows,
            width: cols,
            height: rows_wanted,
        }
    }

    /// Pastes a snapshot with its top-left corner at subpixel `(x, y)`,
    /// placing each non-space character into its cell. The current
    /// transform does not apply.
    pub fn put_image_data(&mut self, image: &ImageData, x: f64, y: f64) {
        let block = self.block_size();
        let x0 = x.floor() as i32;
        let y0 = y.floor() as i32;
        for (r, row) in image.rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let px = x0 + (c * block.x) as i32;
                let py = y0 + (r * block.y) as i32;
                self.set_character(px, py, ch);
            }
        }
    }
}

/// Drops ANSI escape sequences (`ESC [ ... m` and friends), keeping only the
/// printable characters of a frame line.
#[must_use]
pub fn strip_escapes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_escape = false;
    for ch in line.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::canvas::{Canvas, FastCanvas, FastCanvasOptions};

    fn canvas(w: usize, h: usize) -> FastCanvas {
        FastCanvas::new(Some(w), Some(h), FastCanvasOptions::default())
    }

    #[test]
    fn strip_escapes_drops_sgr_sequences() {
        assert_eq!(strip_escapes("\x1b[91m⣿\x1b[39m \x1b[0m"), "⣿ ");
        assert_eq!(strip_escapes("plain"), "plain");
        assert_eq!(strip_escapes(""), "");
    }

    #[test]
    fn snapshot_captures_glyphs() {
        let mut c = canvas(8, 8);
        let mut ctx = Context::new(&mut c);
        ctx.fill_rect(0.0, 0.0, 2.0, 4.0);
        let image = ctx.get_image_data(0.0, 0.0, 8.0, 8.0);
        assert_eq!(image.width, 4);
        assert_eq!(image.height, 2);
        assert_eq!(image.rows, vec!["⣿   ".to_owned(), "    ".to_owned()]);
    }

    #[test]
    fn snapshot_of_a_subregion() {
        let mut c = canvas(8, 8);
        let mut ctx = Context::new(&mut c);
        ctx.fill_rect(2.0, 4.0, 2.0, 4.0);
        let image = ctx.get_image_data(2.0, 4.0, 2.0, 4.0);
        assert_eq!(image.rows, vec!["⣿".to_owned()]);
    }

    #[test]
    fn out_of_range_region_is_space_padded() {
        let mut c = canvas(4, 4);
        let ctx = Context::new(&mut c);
        let image = ctx.get_image_data(0.0, 0.0, 8.0, 8.0);
        assert_eq!(image.rows, vec!["    ".to_owned(), "    ".to_owned()]);
    }

    #[test]
    fn paste_places_characters_in_cells() {
        let mut c = canvas(8, 8);
        {
            let mut ctx = Context::new(&mut c);
            ctx.fill_rect(0.0, 0.0, 2.0, 4.0);
            let image = ctx.get_image_data(0.0, 0.0, 2.0, 4.0);
            ctx.put_image_data(&image, 4.0, 4.0);
        }
        let frame = c.frame("\n");
        let stripped: Vec<String> = frame.lines().map(strip_escapes).collect();
        assert_eq!(stripped[1].chars().nth(2), Some('⣿'));
    }

    #[test]
    fn paste_skips_blank_cells() {
        let mut c = canvas(8, 8);
        let mut ctx = Context::new(&mut c);
        ctx.fill_rect(0.0, 0.0, 2.0, 4.0);
        let snapshot = ctx.get_image_data(0.0, 0.0, 8.0, 8.0);
        ctx.clear();
        ctx.put_image_data(&snapshot, 0.0, 0.0);
        let stripped: Vec<String> = ctx.frame().lines().map(strip_escapes).collect();
        assert_eq!(stripped, vec!["⣿   ".to_owned(), "    ".to_owned()]);
    }
}
