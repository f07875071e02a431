// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal color model for the `termcanvas` family of crates.
//!
//! A [Color] is either a 24-bit RGB triple or a native terminal color index
//! (`-1` meaning invisible / "use the terminal default"). Depending on the
//! [ColorMode] a color is reduced to one of three capability tiers before being
//! emitted as an ANSI escape sequence:
//!
//! - [`ColorMode::Ansi16`]: the 16 classic colors (8 normal + 8 bright),
//! - [`ColorMode::Ansi256`]: the xterm 256-color cube,
//! - [`ColorMode::Truecolor`]: 24-bit `38;2;r;g;b` sequences.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//!
//! Style strings in the CSS subset understood by the drawing context
//! (`#rrggbb`, `rgb(..)`, `rgba(..)`, named web colors, raw ANSI indices) are
//! parsed by [parse_style]; unparseable input yields `None`, never an error.

// Attach.
pub mod ansi_escape_codes;
pub mod color;
pub mod convert;
pub mod detect_color_mode;
pub mod named_colors;
pub mod parse_style;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use convert::*;
pub use detect_color_mode::*;
pub use named_colors::*;
pub use parse_style::*;
