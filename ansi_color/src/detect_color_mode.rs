// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Heuristic detection of the terminal's color capability tier.
//!
//! Canvases take an explicit [ColorMode] in their options; this module is for
//! callers that want a sensible default. Detection is environment-driven
//! (`NO_COLOR`, `COLORTERM`, `TERM`, CI detection) and can be pinned with
//! [global_color_mode::set_override], which is also how tests make the result
//! deterministic.

use std::env;

use crate::ColorMode;

/// Global override + memo slot for the detected color mode. A global is the
/// honest shape here: the answer depends on the process environment, not on
/// any one canvas.
pub mod global_color_mode {
    use std::sync::atomic::{AtomicI8, Ordering};

    use super::{ColorMode, examine_env_vars_to_determine_color_mode};

    static COLOR_MODE_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    /// Returns the override if one is set, otherwise consults the
    /// environment.
    pub fn detect() -> ColorMode {
        try_get_override().unwrap_or_else(|_| examine_env_vars_to_determine_color_mode())
    }

    /// Pins the detected mode, regardless of the environment.
    ///
    /// # Testing support
    ///
    /// Tests that call this must carry `#[serial]` (the
    /// [serial_test](https://crates.io/crates/serial_test) crate); the slot is
    /// process-global.
    pub fn set_override(mode: ColorMode) {
        COLOR_MODE_OVERRIDE.store(i8::from(mode), Ordering::SeqCst);
    }

    pub fn clear_override() { COLOR_MODE_OVERRIDE.store(NOT_SET_VALUE, Ordering::SeqCst); }

    /// The override value, or `Err(())` when none is set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorMode, ()> {
        ColorMode::try_from(COLOR_MODE_OVERRIDE.load(Ordering::SeqCst))
    }
}

/// These impls let the atomic override slot store a [ColorMode].
mod convert_between_color_mode_and_i8 {
    impl TryFrom<i8> for super::ColorMode {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorMode::Ansi16),
                2 => Ok(super::ColorMode::Ansi256),
                3 => Ok(super::ColorMode::Truecolor),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorMode> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorMode) -> Self {
            match value {
                super::ColorMode::Ansi16    => 1,
                super::ColorMode::Ansi256   => 2,
                super::ColorMode::Truecolor => 3,
            }
        }
    }
}

/// Determines the color mode heuristically from environment variables.
///
/// `NO_COLOR`/`TERM=dumb` degrade to [ColorMode::Ansi16] (this crate always
/// emits *something*; a canvas with no color at all is not a useful canvas).
#[must_use]
pub fn examine_env_vars_to_determine_color_mode() -> ColorMode {
    if env_no_color() || as_str(&env::var("TERM")) == Ok("dumb") {
        return ColorMode::Ansi16;
    }

    if as_str(&env::var("COLORTERM")) == Ok("truecolor")
        || as_str(&env::var("COLORTERM")) == Ok("24bit")
        || as_str(&env::var("TERM_PROGRAM")) == Ok("iTerm.app")
    {
        return ColorMode::Truecolor;
    }

    if env::var("TERM").map(|term| check_256_color(&term)) == Ok(true) {
        return ColorMode::Ansi256;
    }

    // CI runners generally cope with 256 colors even when TERM says less.
    if is_ci::uncached() {
        return ColorMode::Ansi256;
    }

    ColorMode::Ansi16
}

mod helpers {
    pub fn check_256_color(term: &str) -> bool {
        term.ends_with("256") || term.ends_with("256color")
    }

    pub fn env_no_color() -> bool {
        match super::as_str(&std::env::var("NO_COLOR")) {
            Ok("0") | Err(_) => false,
            Ok(_) => true,
        }
    }
}
pub use helpers::*;

fn as_str<E>(result: &Result<String, E>) -> Result<&str, &E> {
    match result {
        Ok(inner) => Ok(inner),
        Err(e) => Err(e),
    }
}
