// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Quantization of [Color] values down to indexed terminal palettes.
//!
//! Two reductions exist:
//! - [ansi16_code]: a perceptual bucketing into the classic 16-color palette
//!   (grayscale detection first, then one bit per channel + a brightness bit),
//! - [ansi256_code]: the xterm 6×6×6 cube, `floor(c/50)` per channel.
//!
//! Native [Color::Ansi] indices pass through both unchanged.

use crate::{Color, ColorMode, ansi};

/// Reduces a color to a 16-color palette index (`0..=15`).
///
/// Near-gray triples (`|r−g| < 64 && |g−b| < 64`) are bucketed by total
/// brightness into black / bright-black / white / bright-white. Everything
/// else gets one bit per channel above a threshold: 160 when any channel
/// exceeds 160 (the "bright" case, which also sets bit 3), else 64.
#[must_use]
pub fn ansi16_code(color: Color) -> i16 {
    let (r, g, b) = match color {
        Color::Ansi(code) => return code,
        Color::Rgb(r, g, b) => (i16::from(r), i16::from(g), i16::from(b)),
    };

    let is_gray = (r - g).abs() < 64 && (g - b).abs() < 64;
    if is_gray {
        let sum = r + g + b;
        if sum < 80 {
            return ansi::BLACK;
        }
        if sum < 150 {
            return ansi::BRIGHT_BLACK;
        }
        if sum < 200 {
            return ansi::WHITE;
        }
        return ansi::BRIGHT_WHITE;
    }

    let bright = r > 160 || g > 160 || b > 160;
    let mid = if bright { 160 } else { 64 };
    i16::from(r > mid)
        | (i16::from(g > mid) << 1)
        | (i16::from(b > mid) << 2)
        | (i16::from(bright) << 3)
}

/// Reduces a color to a 256-color palette index.
///
/// RGB triples map into the 6×6×6 cube at `16..=231`; channel buckets are
/// `floor(c/50)` clamped to 5 so that e.g. 255 stays inside the cube.
#[must_use]
pub fn ansi256_code(color: Color) -> i16 {
    match color {
        Color::Ansi(code) => code,
        Color::Rgb(r, g, b) => {
            let r = (i16::from(r) / 50).min(5);
            let g = (i16::from(g) / 50).min(5);
            let b = (i16::from(b) / 50).min(5);
            r * 36 + g * 6 + b + 16
        }
    }
}

/// Reduces an optional color to the palette index for `mode`. `None` yields
/// [ansi::INVISIBLE]. Truecolor has no index of its own, so it falls back to
/// the 256-color code (a terminal that supports truecolor also supports the
/// 256-color sequences).
#[must_use]
pub fn color_to_code(color: Option<Color>, mode: ColorMode) -> i16 {
    let Some(color) = color else {
        return ansi::INVISIBLE;
    };
    match mode {
        ColorMode::Ansi16 => ansi16_code(color),
        ColorMode::Ansi256 | ColorMode::Truecolor => ansi256_code(color),
    }
}
