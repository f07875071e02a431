// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parsing of CSS-flavored style strings into [Color] values.
//!
//! Recognized forms, tried in order:
//! - `#rrggbb` hex,
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)` (the alpha component is ignored),
//! - named web colors, case-insensitive,
//! - a raw numeric ANSI palette index (`"9"`, `"208"`).
//!
//! Anything else yields `None`. Draw calls treat `None` as "leave the current
//! style unchanged" rather than an error.

use crate::{Color, named_color};

/// Parses a style string. Returns `None` for unrecognized input.
#[must_use]
pub fn parse_style(style: &str) -> Option<Color> {
    let style = style.trim();
    if let Some(hex) = style.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = functional_args(style, "rgb(") {
        return parse_channels(args);
    }
    if let Some(args) = functional_args(style, "rgba(") {
        return parse_channels(args);
    }
    if let Some(color) = named_color(style) {
        return Some(color);
    }
    // Raw ANSI palette index.
    style
        .parse::<i16>()
        .ok()
        .filter(|code| (-1..=255).contains(code))
        .map(Color::Ansi)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Strips `prefix` and the trailing `)` from a functional notation, yielding
/// the bare argument list.
fn functional_args<'a>(style: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = style.strip_prefix(prefix)?;
    rest.strip_suffix(')')
}

fn parse_channels(args: &str) -> Option<Color> {
    let mut parts = args.split(',').map(str::trim);
    let r = parts.next()?.parse::<u8>().ok()?;
    let g = parts.next()?.parse::<u8>().ok()?;
    let b = parts.next()?.parse::<u8>().ok()?;
    // A fourth (alpha) component is tolerated and ignored.
    Some(Color::Rgb(r, g, b))
}
