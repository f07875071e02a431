// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumString};

/// A color as the canvas crates understand it: either a full RGB triple, or a
/// native terminal color index. Indices `0..=15` are the classic palette (see
/// [ansi]), `16..=255` the xterm cube, and [ansi::INVISIBLE] (`-1`) means "no
/// color" (the terminal default is used).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Rgb(u8, u8, u8),
    Ansi(i16),
}

/// The color capability tier of the target terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ColorMode {
    Ansi16,
    Ansi256,
    Truecolor,
}

/// The classic 16-color palette indices, plus the `-1` "invisible" sentinel
/// that buffers use for "nothing written here".
pub mod ansi {
    pub const INVISIBLE: i16 = -1;
    pub const BLACK: i16 = 0;
    pub const RED: i16 = 1;
    pub const GREEN: i16 = 2;
    pub const YELLOW: i16 = 3;
    pub const BLUE: i16 = 4;
    pub const MAGENTA: i16 = 5;
    pub const CYAN: i16 = 6;
    pub const WHITE: i16 = 7;
    pub const BRIGHT_BLACK: i16 = 8;
    pub const BRIGHT_RED: i16 = 9;
    pub const BRIGHT_GREEN: i16 = 10;
    pub const BRIGHT_YELLOW: i16 = 11;
    pub const BRIGHT_BLUE: i16 = 12;
    pub const BRIGHT_MAGENTA: i16 = 13;
    pub const BRIGHT_CYAN: i16 = 14;
    pub const BRIGHT_WHITE: i16 = 15;
}

impl Color {
    /// `true` when this color is the [ansi::INVISIBLE] sentinel.
    #[must_use]
    pub fn is_invisible(&self) -> bool { matches!(self, Color::Ansi(ansi::INVISIBLE)) }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self { Color::Rgb(r, g, b) }
}
