// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run-length escape emission for [frame](crate::Canvas::frame) rendering.
//!
//! Terminal color state is sticky, so a frame only needs an escape where the
//! color actually changes from the previous cell on the line. This keeps
//! frames small: a solid-colored row costs one escape, not one per cell.

use termcanvas_ansi_color::{AnsiString, RESET, ansi, code_to_escape};

/// Per-line escape state. Create one per frame, call [EscapeRun::push] per
/// cell and [EscapeRun::end_line] at each line break.
#[derive(Debug)]
pub(crate) struct EscapeRun {
    fg_default: AnsiString,
    bg_default: AnsiString,
    last_fg: AnsiString,
    last_bg: AnsiString,
    /// Whether any non-default color was active on the current line; decides
    /// the trailing [RESET].
    colored: bool,
    use_background: bool,
}

impl EscapeRun {
    pub fn new(use_background: bool) -> Self {
        let fg_default = code_to_escape(ansi::INVISIBLE, false);
        let bg_default = code_to_escape(ansi::INVISIBLE, true);
        Self {
            last_fg: fg_default.clone(),
            last_bg: bg_default.clone(),
            fg_default,
            bg_default,
            colored: false,
            use_background,
        }
    }

    /// Emits the escapes needed before the next cell's glyph, if any.
    pub fn push(&mut self, out: &mut String, fg: AnsiString, bg: AnsiString) {
        if fg != self.last_fg {
            out.push_str(&fg);
            self.last_fg = fg;
        }
        if self.use_background && bg != self.last_bg {
            out.push_str(&bg);
            self.last_bg = bg;
        }
        if self.last_fg != self.fg_default || (self.use_background && self.last_bg != self.bg_default)
        {
            self.colored = true;
        }
    }

    /// Ends the line: emits a full [RESET] iff any color was active, and
    /// rewinds the run state for the next line.
    pub fn end_line(&mut self, out: &mut String) {
        if self.colored {
            out.push_str(RESET);
        }
        self.last_fg = self.fg_default.clone();
        self.last_bg = self.bg_default.clone();
        self.colored = false;
    }
}
