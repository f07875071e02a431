// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # termcanvas
//!
//! A Canvas-2D flavored drawing surface for the terminal. Shapes are described
//! in a continuous pixel space (paths, affine transforms, fills and strokes)
//! and rendered down to Unicode glyphs plus ANSI escape sequences:
//!
//! - [FastCanvas]: 2×4 braille dots per character cell, one ANSI palette code
//!   per cell half. Cheap, no blending.
//! - [BlendCanvas]: full RGBA per subpixel with alpha-weighted color averaging,
//!   rendered as braille ([BlendCanvas::smooth]) or 2×2 half-blocks
//!   ([BlendCanvas::block]).
//!
//! The [Context] type drives either canvas through a familiar API: `save` /
//! `restore`, `translate` / `rotate` / `scale`, `begin_path` / `line_to` /
//! `arc` / `fill` / `stroke`, `fill_rect`, `fill_text`, and friends.
//!
//! ```
//! use termcanvas::{Context, FastCanvas, FastCanvasOptions};
//!
//! let mut canvas = FastCanvas::new(Some(80), Some(40), FastCanvasOptions::default());
//! let mut ctx = Context::new(&mut canvas);
//! ctx.set_stroke_style("tomato");
//! ctx.begin_path();
//! ctx.move_to(0.0, 0.0);
//! ctx.line_to(79.0, 39.0);
//! ctx.stroke();
//! println!("{}", ctx.frame());
//! ```

// Attach sources.
pub mod canvas;
pub mod context;
pub mod geometry;
pub mod text;

// Re-export.
pub use canvas::*;
pub use context::*;
pub use geometry::*;
// The color API is part of this crate's public surface.
pub use termcanvas_ansi_color::{Color, ColorMode, parse_style};
pub use text::*;
