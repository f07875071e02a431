// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte-exact ANSI SGR escape sequence emission.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::fmt::Write;

use smallstr::SmallString;

use crate::{Color, ColorMode, ansi, color_to_code};

/// Inline-capacity string for escape sequences. The longest sequence emitted
/// here is `\x1b[48;2;255;255;255m` (19 bytes), so these never spill to the
/// heap.
pub type AnsiString = SmallString<[u8; 24]>;

/// CSI: control sequence introducer.
pub const CSI: &str = "\x1b[";
/// SGR: set graphics rendition terminator.
pub const SGR: &str = "m";
/// Resets all graphics attributes (colors included).
pub const RESET: &str = "\x1b[0m";

/// Encodes a palette index (16- or 256-color) as an SGR escape sequence.
///
/// - [ansi::INVISIBLE] (or any negative code) → default-color reset
///   (`\x1b[39m` / `\x1b[49m`),
/// - `0..=7` → `\x1b[3{n}m` / `\x1b[4{n}m`,
/// - `8..=15` → the bright forms `\x1b[9{n-8}m` / `\x1b[10{n-8}m`,
/// - everything above → the 256-color forms `\x1b[38;5;{n}m` / `\x1b[48;5;{n}m`.
#[must_use]
pub fn code_to_escape(code: i16, is_background: bool) -> AnsiString {
    let mut acc = AnsiString::new();
    let (reset, normal, bright, extended) = if is_background {
        ("49", "4", "10", "48;5;")
    } else {
        ("39", "3", "9", "38;5;")
    };
    if code < 0 {
        _ = write!(acc, "{CSI}{reset}{SGR}");
    } else if code < 8 {
        _ = write!(acc, "{CSI}{normal}{code}{SGR}");
    } else if code < 16 {
        _ = write!(acc, "{CSI}{bright}{n}{SGR}", n = code - 8);
    } else {
        _ = write!(acc, "{CSI}{extended}{code}{SGR}");
    }
    acc
}

/// Encodes an RGB triple as a 24-bit SGR escape sequence
/// (`\x1b[38;2;r;g;bm` / `\x1b[48;2;r;g;bm`). Native ANSI indices fall back to
/// [code_to_escape]; `None` resets to the default color.
#[must_use]
pub fn truecolor_escape(color: Option<Color>, is_background: bool) -> AnsiString {
    match color {
        None => code_to_escape(ansi::INVISIBLE, is_background),
        Some(Color::Ansi(code)) => code_to_escape(code, is_background),
        Some(Color::Rgb(r, g, b)) => {
            let mut acc = AnsiString::new();
            let ground = if is_background { "48" } else { "38" };
            _ = write!(acc, "{CSI}{ground};2;{r};{g};{b}{SGR}");
            acc
        }
    }
}

/// Encodes an optional color for the given [ColorMode]. This is the one entry
/// point the canvases use when serializing a frame.
#[must_use]
pub fn color_to_escape(color: Option<Color>, mode: ColorMode, is_background: bool) -> AnsiString {
    match mode {
        ColorMode::Ansi16 | ColorMode::Ansi256 => {
            code_to_escape(color_to_code(color, mode), is_background)
        }
        ColorMode::Truecolor => truecolor_escape(color, is_background),
    }
}
