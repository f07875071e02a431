// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bresenham line stepping.

/// Walks every pixel of the line segment from `(x0, y0)` to `(x1, y1)`,
/// endpoints included, feeding each one to `sink`.
///
/// Inputs are floored onto the integer grid first, so callers can hand over
/// transformed (fractional) coordinates directly. The integer error
/// accumulator guarantees no gaps and no duplicate pixels along the walk.
pub fn line(x0: f64, y0: f64, x1: f64, y1: f64, sink: &mut impl FnMut(i32, i32)) {
    let (x0, y0) = (x0.floor() as i64, y0.floor() as i64);
    let (x1, y1) = (x1.floor() as i64, y1.floor() as i64);

    let dx = x1 - x0;
    let dy = y1 - y0;
    let adx = dx.abs();
    let ady = dy.abs();
    let sx: i64 = if dx > 0 { 1 } else { -1 };
    let sy: i64 = if dy > 0 { 1 } else { -1 };
    let mut eps: i64 = 0;

    if adx > ady {
        // X-major: step x every iteration, y when the error tips over.
        let mut y = y0;
        let mut x = x0;
        while if sx < 0 { x >= x1 } else { x <= x1 } {
            sink(x as i32, y as i32);
            eps += ady;
            if (eps << 1) >= adx {
                y += sy;
                eps -= adx;
            }
            x += sx;
        }
    } else {
        // Y-major.
        let mut x = x0;
        let mut y = y0;
        while if sy < 0 { y >= y1 } else { y <= y1 } {
            sink(x as i32, y as i32);
            eps += adx;
            if (eps << 1) >= ady {
                x += sx;
                eps -= ady;
            }
            y += sy;
        }
    }
}
