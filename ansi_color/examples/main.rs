// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use termcanvas_ansi_color::{Color, ColorMode, RESET, color_to_escape, global_color_mode,
                            parse_style};

fn main() {
    let mode = global_color_mode::detect();
    println!("detected color mode: {mode}");

    // Print a swatch for a handful of style strings at every capability tier.
    for style in ["#ff0000", "rgb(0, 128, 255)", "tomato", "9"] {
        let color = parse_style(style);
        for mode in [ColorMode::Ansi16, ColorMode::Ansi256, ColorMode::Truecolor] {
            let fg = color_to_escape(color, mode, false);
            println!("{mode:>9}: {fg}{style}{RESET}");
        }
    }

    // Background swatches.
    for (r, g, b) in [(255, 0, 0), (0, 255, 0), (0, 0, 255)] {
        let bg = color_to_escape(Some(Color::Rgb(r, g, b)), ColorMode::Truecolor, true);
        print!("{bg}  {RESET}");
    }
    println!();
}
