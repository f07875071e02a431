// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The Canvas-2D style drawing API over a [Canvas].
//!
//! A [Context] owns the mutable view of one canvas plus the drawing state:
//! current transform (with a save/restore stack), current path, stroke and
//! fill colors, draw mode, and text settings. All draw calls are expressed in
//! continuous pixel coordinates and transformed at rasterization time.

use std::f64::consts::PI;

use kurbo::{Affine, Rect};
use termcanvas_ansi_color::{Color, parse_style};

use crate::{canvas::Canvas,
            context::draw_mode::{self, DrawMode},
            geometry::Path,
            text::{FontRegistry, TextAlign, TextMetrics, TextRasterizer}};

/// Fallback angular step for [Context::arc] when the radius is too small for
/// the chord-based step to be computed.
const ARC_FALLBACK_STEP: f64 = PI / 8.0;

pub struct Context<'a> {
    canvas: &'a mut dyn Canvas,
    fonts: Option<&'a FontRegistry>,
    matrix: Affine,
    stack: Vec<Affine>,
    path: Path,
    stroke_color: Option<Color>,
    fill_color: Option<Color>,
    mode: DrawMode,
    text_align: TextAlign,
    font: Option<String>,
}

impl<'a> Context<'a> {
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        Self {
            canvas,
            fonts: None,
            matrix: Affine::IDENTITY,
            stack: vec![],
            path: Path::new(),
            stroke_color: Some(Color::Rgb(255, 255, 255)),
            fill_color: Some(Color::Rgb(100, 100, 100)),
            mode: DrawMode::default(),
            text_align: TextAlign::default(),
            font: None,
        }
    }

    /// Like [Context::new], with a font registry for pixel text rendering.
    pub fn with_fonts(canvas: &'a mut dyn Canvas, fonts: &'a FontRegistry) -> Self {
        Self {
            fonts: Some(fonts),
            ..Self::new(canvas)
        }
    }

    // ── Canvas passthrough ──────────────────────────────────────────────

    pub fn width(&self) -> usize { self.canvas.width() }

    pub fn height(&self) -> usize { self.canvas.height() }

    pub fn set_width(&mut self, width: usize) { self.canvas.set_width(width); }

    pub fn set_height(&mut self, height: usize) { self.canvas.set_height(height); }

    /// Width over height of one subpixel, assuming terminal cells render
    /// twice as tall as wide. 1.0 on braille canvases (square subpixels),
    /// 2.0 on half-block canvases. Multiply y extents by this to draw
    /// circles that look round.
    pub fn aspect_ratio(&self) -> f64 {
        let block = self.canvas.block_size();
        block.x as f64 / block.y as f64 * 2.0
    }

    pub fn clear(&mut self) { self.canvas.clear(); }

    /// Serializes the canvas with newline-delimited rows.
    pub fn frame(&self) -> String { self.canvas.frame("\n") }

    pub fn block_size(&self) -> crate::canvas::BlockSize { self.canvas.block_size() }

    /// Places a character directly into the cell containing subpixel
    /// `(x, y)`, bypassing transform and styles.
    pub fn set_character(&mut self, x: i32, y: i32, ch: char) {
        self.canvas.set_character(x, y, ch, None, None);
    }

    // ── Styles ──────────────────────────────────────────────────────────

    /// Sets the stroke color from a CSS-style string (`"#rrggbb"`,
    /// `"rgb(..)"`, a named color, or a palette index). Unparseable styles
    /// leave the current color unchanged.
    pub fn set_stroke_style(&mut self, style: &str) {
        match parse_style(style) {
            Some(color) => self.stroke_color = Some(color),
            None => tracing::warn!(style, "ignoring unparseable stroke style"),
        }
    }

    /// The fill counterpart of [Context::set_stroke_style].
    pub fn set_fill_style(&mut self, style: &str) {
        match parse_style(style) {
            Some(color) => self.fill_color = Some(color),
            None => tracing::warn!(style, "ignoring unparseable fill style"),
        }
    }

    pub fn stroke_color(&self) -> Option<Color> { self.stroke_color }

    pub fn fill_color(&self) -> Option<Color> { self.fill_color }

    pub fn set_stroke_color(&mut self, color: Option<Color>) { self.stroke_color = color; }

    pub fn set_fill_color(&mut self, color: Option<Color>) { self.fill_color = color; }

    pub fn draw_mode(&self) -> DrawMode { self.mode }

    pub fn set_draw_mode(&mut self, mode: DrawMode) { self.mode = mode; }

    // ── Transform ───────────────────────────────────────────────────────

    /// The current transform matrix.
    pub fn matrix(&self) -> Affine { self.matrix }

    /// Pushes the current transform onto the state stack.
    pub fn save(&mut self) { self.stack.push(self.matrix); }

    /// Pops the most recently saved transform. No-op when nothing is saved.
    pub fn restore(&mut self) {
        if let Some(matrix) = self.stack.pop() {
            self.matrix = matrix;
        }
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        self.matrix = self.matrix * Affine::translate((x, y));
    }

    /// Rotates the coordinate system by `degrees` (not radians), clockwise
    /// for positive values in the y-down pixel space.
    pub fn rotate(&mut self, degrees: f64) {
        self.matrix = self.matrix * Affine::rotate(degrees.to_radians());
    }

    pub fn scale(&mut self, x: f64, y: f64) {
        self.matrix = self.matrix * Affine::scale_non_uniform(x, y);
    }

    // ── Paths ───────────────────────────────────────────────────────────

    pub fn begin_path(&mut self) { self.path.begin(); }

    pub fn close_path(&mut self) { self.path.close(); }

    pub fn move_to(&mut self, x: f64, y: f64) { self.path.move_to(x, y); }

    pub fn line_to(&mut self, x: f64, y: f64) { self.path.line_to(x, y); }

    /// Appends an axis-aligned rectangle to the current path.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) { self.path.rect(x, y, w, h); }

    /// Read access to the current path, mostly useful for diagnostics.
    pub fn path(&self) -> &Path { &self.path }

    /// Approximates a circular arc with line segments, appended to the
    /// current path.
    ///
    /// Angles are radians, measured from the positive x axis. The angular
    /// step is derived from the radius so that segments stay roughly one
    /// pixel long; tiny radii fall back to [ARC_FALLBACK_STEP].
    pub fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        let mut start = start_angle;
        let mut end = end_angle;

        let mut step = ((1.0 / radius).acos() - (2.0 / radius).acos()).abs();
        if !step.is_finite() || step <= 0.0 {
            step = ARC_FALLBACK_STEP;
        }

        if counterclockwise {
            let s = start;
            start = end;
            end = s + 2.0 * PI;
        }
        start %= 2.0 * PI;
        if end < start {
            end += 2.0 * PI;
        }

        let mut th = start;
        while th <= end {
            self.path.line_to(cx + radius * th.cos(), cy + radius * th.sin());
            th += step;
        }
    }

    /// Fills the current path with the fill color, routed by the draw mode.
    pub fn fill(&mut self) {
        let shaped = self.path.transform(self.matrix);
        self.fill_shaped(&shaped);
    }

    /// Strokes the current path with the stroke color.
    pub fn stroke(&mut self) {
        let shaped = self.path.transform(self.matrix);
        self.stroke_shaped(&shaped);
    }

    fn fill_shaped(&mut self, shaped: &Path) {
        let clip = self.clip_rect();
        let mode = self.mode;
        let color = self.fill_color;
        let canvas = &mut *self.canvas;
        shaped.fill(clip, &mut |x, y| {
            draw_mode::fill_pixel(canvas, mode, color, x, y);
        });
    }

    fn stroke_shaped(&mut self, shaped: &Path) {
        let mode = self.mode;
        let color = self.stroke_color;
        let canvas = &mut *self.canvas;
        shaped.stroke(&mut |x, y| {
            draw_mode::stroke_pixel(canvas, mode, color, x, y);
        });
    }

    fn clip_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width() as f64, self.height() as f64)
    }

    // ── Rectangles ──────────────────────────────────────────────────────

    /// Fills the rectangle `[x, x+w) × [y, y+h)` under the current
    /// transform, without touching the current path.
    ///
    /// The half-pixel inset keeps the rasterized footprint at exactly `w`×`h`
    /// pixels: the outline vertices land strictly inside the last covered
    /// pixel row and column, and the inclusive scanline spans do the rest.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let shaped = self.rect_outline(x, y, w, h);
        self.fill_shaped(&shaped);
    }

    /// Strokes the boundary of the rectangle `[x, x+w) × [y, y+h)`.
    pub fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let shaped = self.rect_outline(x, y, w, h);
        self.stroke_shaped(&shaped);
    }

    /// Erases the rectangle's pixels (lit state and colors).
    pub fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let shaped = self.rect_outline(x, y, w, h);
        let clip = self.clip_rect();
        let canvas = &mut *self.canvas;
        shaped.fill(clip, &mut |px, py| canvas.clear_pixel(px, py));
    }

    fn rect_outline(&self, x: f64, y: f64, w: f64, h: f64) -> Path {
        let mut path = Path::new();
        path.rect(x, y, w - 0.5, h - 0.5);
        path.transform(self.matrix)
    }

    // ── Text ────────────────────────────────────────────────────────────

    pub fn text_align(&self) -> TextAlign { self.text_align }

    pub fn set_text_align(&mut self, align: TextAlign) { self.text_align = align; }

    pub fn font(&self) -> Option<&str> { self.font.as_deref() }

    /// Selects a font by registry name, or `None` for the cell-character
    /// fallback. Names that resolve to no registered rasterizer also fall
    /// back at draw time.
    pub fn set_font(&mut self, name: Option<&str>) { self.font = name.map(str::to_owned); }

    /// Draws `text` with its baseline at `(x, y)` using the fill color.
    ///
    /// With a resolved font, each lit bitmap pixel becomes a 1×1
    /// [Context::fill_rect] (so transforms and draw mode apply). Without
    /// one, characters are placed directly into cells, one per block.
    pub fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.draw_text(text, x, y, true);
    }

    /// [Context::fill_text], but stroking each bitmap pixel with the stroke
    /// color.
    pub fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        self.draw_text(text, x, y, false);
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, fill: bool) {
        if let Some(rasterizer) = self.resolve_font() {
            let bitmap = rasterizer.rasterize(text);
            let offset = self.align_offset(bitmap.width as f64);
            let top = y - f64::from(bitmap.ascent);
            for (row, line) in bitmap.rows.iter().enumerate() {
                for (col, &value) in line.iter().enumerate() {
                    if value == 0 {
                        continue;
                    }
                    let px = x + offset + col as f64;
                    let py = top + row as f64;
                    if fill {
                        self.fill_rect(px, py, 1.0, 1.0);
                    } else {
                        self.stroke_rect(px, py, 1.0, 1.0);
                    }
                }
            }
            return;
        }

        // Fallback: one character per cell, advancing a block at a time.
        let advance = self.canvas.block_size().x as f64;
        let count = text.chars().count();
        let offset = self.align_offset(count as f64 * advance);
        let color = if fill { self.fill_color } else { self.stroke_color };
        for (i, ch) in text.chars().enumerate() {
            let px = (x + offset + i as f64 * advance).floor() as i32;
            self.canvas
                .set_character(px, y.floor() as i32, ch, color, None);
        }
    }

    /// Metrics for `text` under the current font, or cell-based metrics for
    /// the fallback.
    pub fn measure_text(&self, text: &str) -> TextMetrics {
        match self.resolve_font() {
            Some(rasterizer) => {
                let bitmap = rasterizer.rasterize(text);
                TextMetrics {
                    width: bitmap.width as f64,
                    ascent: f64::from(bitmap.ascent),
                    descent: f64::from(bitmap.descent),
                    x_height: f64::from(bitmap.x_height),
                }
            }
            None => {
                let block = self.canvas.block_size();
                let cell_height = block.y as f64;
                TextMetrics {
                    width: (text.chars().count() * block.x) as f64,
                    ascent: cell_height,
                    descent: 0.0,
                    x_height: cell_height,
                }
            }
        }
    }

    /// The current font's pixel size, or the block height for the fallback.
    pub fn font_size(&self) -> f64 {
        self.resolve_font()
            .map_or(self.canvas.block_size().y as f64, |r| r.pixel_size() as f64)
    }

    fn resolve_font(&self) -> Option<&'a dyn TextRasterizer> {
        let name = self.font.as_deref()?;
        self.fonts?.get(name)
    }

    fn align_offset(&self, width: f64) -> f64 {
        match self.text_align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        }
    }

    // ── Accepted but unsupported ────────────────────────────────────────

    /// Line widths other than one pixel are not rendered; accepted for
    /// drop-in compatibility.
    pub fn set_line_width(&mut self, _width: f64) {}

    /// Dash patterns are not rendered; accepted for drop-in compatibility.
    pub fn set_line_dash(&mut self, _segments: &[f64]) {}

    /// Alpha is only honored by [BlendCanvas](crate::BlendCanvas) subpixel
    /// writes; the context-level global alpha is accepted and ignored.
    pub fn set_global_alpha(&mut self, _alpha: f64) {}

    /// Path clipping is not supported; drawing is always clipped to the
    /// canvas rectangle.
    pub fn clip(&mut self) {}
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("matrix", &self.matrix)
            .field("stack_depth", &self.stack.len())
            .field("path_len", &self.path.len())
            .field("stroke_color", &self.stroke_color)
            .field("fill_color", &self.fill_color)
            .field("mode", &self.mode)
            .field("text_align", &self.text_align)
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{canvas::{FastCanvas, FastCanvasOptions},
                text::fixtures::SquareFont};

    fn canvas(w: usize, h: usize) -> FastCanvas {
        FastCanvas::new(Some(w), Some(h), FastCanvasOptions::default())
    }

    #[test]
    fn defaults() {
        let mut c = canvas(4, 4);
        let ctx = Context::new(&mut c);
        assert_eq!(ctx.stroke_color(), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(ctx.fill_color(), Some(Color::Rgb(100, 100, 100)));
        assert_eq!(ctx.draw_mode(), DrawMode::Foreground);
        assert_eq!(ctx.text_align(), TextAlign::Left);
        assert_eq!(ctx.matrix(), Affine::IDENTITY);
    }

    #[test]
    fn style_parsing_keeps_current_color_on_garbage() {
        let mut c = canvas(4, 4);
        let mut ctx = Context::new(&mut c);
        ctx.set_fill_style("#ff0000");
        assert_eq!(ctx.fill_color(), Some(Color::Rgb(255, 0, 0)));
        ctx.set_fill_style("not a color");
        assert_eq!(ctx.fill_color(), Some(Color::Rgb(255, 0, 0)));
        ctx.set_stroke_style("rgb(1, 2, 3)");
        assert_eq!(ctx.stroke_color(), Some(Color::Rgb(1, 2, 3)));
    }

    /// The fill footprint is exactly `[x, x+w) × [y, y+h)`.
    #[test]
    fn fill_rect_covers_exact_pixels() {
        let mut c = canvas(4, 4);
        let mut ctx = Context::new(&mut c);
        ctx.set_fill_style("#ff0000");
        ctx.fill_rect(0.0, 0.0, 2.0, 4.0);
        assert_eq!(ctx.frame(), "\x1b[91m⣿\x1b[39m \x1b[0m");
    }

    #[test]
    fn fill_rect_covers_whole_canvas() {
        let mut c = canvas(4, 4);
        let mut ctx = Context::new(&mut c);
        ctx.set_fill_style("#ff0000");
        ctx.fill_rect(0.0, 0.0, 4.0, 4.0);
        assert_eq!(ctx.frame(), "\x1b[91m⣿⣿\x1b[0m");
    }

    #[test]
    fn stroke_rect_is_boundary_only() {
        let mut c = canvas(8, 8);
        {
            let mut ctx = Context::new(&mut c);
            ctx.stroke_rect(0.0, 0.0, 4.0, 4.0);
        }
        for i in 0..4 {
            assert!(c.get(i, 0));
            assert!(c.get(i, 3));
            assert!(c.get(0, i));
            assert!(c.get(3, i));
        }
        assert!(!c.get(1, 1));
        assert!(!c.get(2, 2));
    }

    #[test]
    fn translate_moves_the_footprint() {
        let mut c = canvas(4, 4);
        let mut ctx = Context::new(&mut c);
        ctx.set_fill_style("#ff0000");
        ctx.translate(2.0, 0.0);
        ctx.fill_rect(0.0, 0.0, 2.0, 4.0);
        assert_eq!(ctx.frame(), " \x1b[91m⣿\x1b[0m");
    }

    #[test]
    fn transforms_compose_in_call_order() {
        let mut c = canvas(8, 4);
        {
            let mut ctx = Context::new(&mut c);
            ctx.translate(2.0, 0.0);
            ctx.scale(2.0, 2.0);
            // Tiny rect: rasterizes as one pixel at the transformed centroid
            // (0.2, 0.2) → scaled (0.4, 0.4) → translated (2.4, 0.4).
            ctx.fill_rect(0.0, 0.0, 1.0, 1.0);
        }
        assert!(c.get(2, 0));
        assert!(!c.get(0, 0));
    }

    #[test]
    fn rotate_is_in_degrees() {
        let mut c = canvas(4, 4);
        {
            let mut ctx = Context::new(&mut c);
            ctx.rotate(90.0);
            // Centroid (1.2, 0.2) rotates a quarter turn to (-0.2, 1.2),
            // rounding to pixel (0, 1).
            ctx.fill_rect(1.0, 0.0, 1.0, 1.0);
        }
        assert!(c.get(0, 1));
        assert!(!c.get(1, 0));
    }

    #[test]
    fn save_restore_roundtrips_the_matrix() {
        let mut c = canvas(4, 4);
        let mut ctx = Context::new(&mut c);
        ctx.translate(1.5, -2.0);
        ctx.rotate(33.0);
        let saved = ctx.matrix();
        ctx.save();
        ctx.scale(3.0, 0.5);
        ctx.translate(-7.0, 7.0);
        assert_ne!(ctx.matrix(), saved);
        ctx.restore();
        assert_eq!(ctx.matrix(), saved);
    }

    #[test]
    fn restore_without_save_is_a_no_op() {
        let mut c = canvas(4, 4);
        let mut ctx = Context::new(&mut c);
        ctx.translate(1.0, 1.0);
        let m = ctx.matrix();
        ctx.restore();
        assert_eq!(ctx.matrix(), m);
    }

    #[test]
    fn stroke_draws_the_path_diagonal() {
        let mut c = canvas(4, 4);
        {
            let mut ctx = Context::new(&mut c);
            ctx.begin_path();
            ctx.move_to(0.0, 0.0);
            ctx.line_to(3.0, 3.0);
            ctx.stroke();
        }
        for i in 0..4 {
            assert!(c.get(i, i));
        }
        assert!(!c.get(0, 3));
    }

    #[test]
    fn close_path_strokes_the_closing_edge() {
        let mut c = canvas(8, 8);
        {
            let mut ctx = Context::new(&mut c);
            ctx.begin_path();
            ctx.move_to(0.0, 0.0);
            ctx.line_to(4.0, 0.0);
            ctx.line_to(4.0, 4.0);
            ctx.close_path();
            ctx.stroke();
        }
        // The closing edge runs from (4, 4) back to (0, 0).
        assert!(c.get(2, 2));
    }

    #[test]
    fn begin_path_discards_previous_path() {
        let mut c = canvas(4, 4);
        {
            let mut ctx = Context::new(&mut c);
            ctx.move_to(0.0, 0.0);
            ctx.line_to(3.0, 0.0);
            ctx.begin_path();
            ctx.stroke();
        }
        assert!(!c.get(1, 0));
    }

    #[test]
    fn arc_vertices_sit_on_the_circle() {
        let mut c = canvas(40, 40);
        let mut ctx = Context::new(&mut c);
        ctx.begin_path();
        ctx.arc(20.0, 20.0, 10.0, 0.0, 2.0 * PI, false);
        let vertices = ctx.path().vertices();
        assert!(vertices.len() > 8);
        for v in vertices {
            let r = ((v.point.x - 20.0).powi(2) + (v.point.y - 20.0).powi(2)).sqrt();
            assert!((r - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn tiny_radius_arc_uses_fallback_step() {
        let mut c = canvas(8, 8);
        let mut ctx = Context::new(&mut c);
        ctx.begin_path();
        ctx.arc(4.0, 4.0, 1.5, 0.0, 2.0 * PI, false);
        // 2π / (π/8) = 16 steps; the inclusive endpoint may or may not
        // survive float accumulation.
        assert!((16..=17).contains(&ctx.path().len()));
    }

    #[test]
    fn counterclockwise_arc_still_spans_the_angles() {
        let mut c = canvas(40, 40);
        let mut ctx = Context::new(&mut c);
        ctx.begin_path();
        ctx.arc(20.0, 20.0, 10.0, 0.0, PI, true);
        assert!(!ctx.path().is_empty());
    }

    #[test]
    fn clear_rect_erases_dots() {
        let mut c = canvas(4, 4);
        {
            let mut ctx = Context::new(&mut c);
            ctx.fill_rect(0.0, 0.0, 4.0, 4.0);
            ctx.clear_rect(0.0, 0.0, 2.0, 4.0);
        }
        assert!(!c.get(0, 0));
        assert!(!c.get(1, 3));
        assert!(c.get(2, 0));
        assert!(c.get(3, 3));
    }

    #[test]
    fn background_draw_mode_routes_fills() {
        let mut c = canvas(4, 4);
        let mut ctx = Context::new(&mut c);
        ctx.set_draw_mode(DrawMode::Background);
        ctx.set_fill_style("#ff0000");
        ctx.fill_rect(0.0, 0.0, 2.0, 4.0);
        let frame = ctx.frame();
        assert!(frame.contains("\x1b[101m"));
        assert!(!frame.contains('⣿'));
    }

    #[test]
    fn plain_text_places_one_char_per_cell() {
        let mut c = canvas(8, 4);
        let mut ctx = Context::new(&mut c);
        ctx.fill_text("AB", 0.0, 0.0);
        assert_eq!(ctx.frame(), "\x1b[97mAB\x1b[39m  \x1b[0m");
    }

    #[test]
    fn centered_plain_text() {
        let mut c = canvas(8, 4);
        let mut ctx = Context::new(&mut c);
        ctx.set_text_align(TextAlign::Center);
        ctx.fill_text("AB", 4.0, 0.0);
        assert_eq!(ctx.frame(), " \x1b[97mAB\x1b[39m \x1b[0m");
    }

    #[test]
    fn right_aligned_plain_text() {
        let mut c = canvas(8, 4);
        let mut ctx = Context::new(&mut c);
        ctx.set_text_align(TextAlign::Right);
        ctx.fill_text("AB", 8.0, 0.0);
        assert_eq!(ctx.frame(), "  \x1b[97mAB\x1b[0m");
    }

    #[test]
    fn bitmap_font_draws_pixels_relative_to_baseline() {
        let mut fonts = FontRegistry::new();
        fonts.insert("square", Box::new(SquareFont { size: 2 }));
        let mut c = canvas(8, 4);
        {
            let mut ctx = Context::with_fonts(&mut c, &fonts);
            ctx.set_font(Some("square"));
            ctx.fill_text("a", 0.0, 2.0);
        }
        // Ascent 2 puts the 2×2 square at rows 0..2.
        assert!(c.get(0, 0));
        assert!(c.get(1, 0));
        assert!(c.get(0, 1));
        assert!(c.get(1, 1));
        assert!(!c.get(0, 2));
        assert!(!c.get(2, 0));
    }

    #[test]
    fn unknown_font_name_falls_back_to_cell_text() {
        let fonts = FontRegistry::new();
        let mut c = canvas(8, 4);
        let mut ctx = Context::with_fonts(&mut c, &fonts);
        ctx.set_font(Some("missing"));
        ctx.fill_text("A", 0.0, 0.0);
        assert!(ctx.frame().contains('A'));
    }

    #[test]
    fn measure_text_with_and_without_font() {
        let mut fonts = FontRegistry::new();
        fonts.insert("square", Box::new(SquareFont { size: 4 }));
        let mut c = canvas(8, 4);
        let mut ctx = Context::with_fonts(&mut c, &fonts);

        let fallback = ctx.measure_text("abc");
        assert_eq!(fallback.width, 6.0);
        assert_eq!(fallback.ascent, 4.0);
        assert_eq!(ctx.font_size(), 4.0);

        ctx.set_font(Some("square"));
        let measured = ctx.measure_text("abc");
        assert_eq!(measured.width, 12.0);
        assert_eq!(measured.ascent, 4.0);
        assert_eq!(ctx.font_size(), 4.0);
    }

    #[test]
    fn aspect_ratio_is_square_for_braille() {
        let mut c = canvas(8, 4);
        let ctx = Context::new(&mut c);
        assert_eq!(ctx.aspect_ratio(), 1.0);
    }
}
