// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Draws a small scene on a braille canvas sized to the terminal.
//!
//! Run with: `cargo run --example shapes`

use std::f64::consts::PI;

use termcanvas::{Context, FastCanvas, FastCanvasOptions};

fn main() {
    let mut canvas = FastCanvas::new(None, None, FastCanvasOptions::default());
    let mut ctx = Context::new(&mut canvas);

    let (w, h) = (ctx.width() as f64, ctx.height() as f64);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let radius = w.min(h) / 2.5;

    // A ring of rotated squares.
    ctx.set_stroke_style("deepskyblue");
    for i in 0..6 {
        ctx.save();
        ctx.translate(cx, cy);
        ctx.rotate(f64::from(i) * 15.0);
        ctx.stroke_rect(-radius / 2.0, -radius / 2.0, radius, radius);
        ctx.restore();
    }

    // An orbiting dot trail.
    ctx.set_fill_style("tomato");
    for i in 0..12 {
        let th = f64::from(i) / 12.0 * 2.0 * PI;
        ctx.fill_rect(cx + radius * th.cos(), cy + radius * th.sin(), 2.0, 2.0);
    }

    // A circle outline through the trail.
    ctx.set_stroke_style("gold");
    ctx.begin_path();
    ctx.arc(cx, cy, radius, 0.0, 2.0 * PI, false);
    ctx.stroke();

    ctx.fill_text("termcanvas", cx.floor(), 0.0);

    println!("{}", ctx.frame());
}
