// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ear-clipping triangulation of simple polygons.
//!
//! Handles both windings and tolerates collinear runs. Self-intersecting
//! input is out of contract; the clipper then still terminates, returning a
//! best-effort partial triangulation.

use kurbo::Point;

/// Triangulates the polygon described by `points` (an open ring, no repeated
/// closing vertex). Returns index triples into `points`.
///
/// Polygons with fewer than 3 vertices yield no triangles.
pub fn triangulate(points: &[Point]) -> Vec<[usize; 3]> {
    let n = points.len();
    let mut triangles = Vec::new();
    if n < 3 {
        return triangles;
    }

    // Winding decides which cross-product sign marks a convex corner.
    let ccw = signed_area(points) >= 0.0;
    let mut ring: Vec<usize> = (0..n).collect();

    while ring.len() > 3 {
        match find_ear(points, &ring, ccw) {
            Some(i) => {
                let m = ring.len();
                let tri = [ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]];
                triangles.push(tri);
                ring.remove(i);
            }
            None => {
                // Degenerate (e.g. self-intersecting) input. Bail with what
                // we have rather than spin.
                tracing::warn!(vertices = ring.len(), "no ear found, polygon is not simple");
                return triangles;
            }
        }
    }
    triangles.push([ring[0], ring[1], ring[2]]);
    triangles
}

/// Twice the signed area of the ring (shoelace formula). Positive for
/// counter-clockwise winding in a y-down coordinate system is irrelevant
/// here; only consistency with [cross] matters.
fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum
}

/// Cross product of (b - a) × (c - b).
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Finds a clippable ear in `ring`, preferring strictly convex corners.
/// Zero-area corners (collinear or duplicate vertices) are clipped as a
/// fallback so rings with repeated points still drain.
fn find_ear(points: &[Point], ring: &[usize], ccw: bool) -> Option<usize> {
    let m = ring.len();
    let mut flat_ear = None;
    for i in 0..m {
        let a = points[ring[(i + m - 1) % m]];
        let b = points[ring[i]];
        let c = points[ring[(i + 1) % m]];
        let turn = if ccw { cross(a, b, c) } else { -cross(a, b, c) };
        if turn == 0.0 {
            flat_ear.get_or_insert(i);
            continue;
        }
        if turn > 0.0 && no_vertex_inside(points, ring, i, a, b, c) {
            return Some(i);
        }
    }
    flat_ear
}

fn no_vertex_inside(
    points: &[Point],
    ring: &[usize],
    ear: usize,
    a: Point,
    b: Point,
    c: Point,
) -> bool {
    let m = ring.len();
    let prev = (ear + m - 1) % m;
    let next = (ear + 1) % m;
    for (i, &idx) in ring.iter().enumerate() {
        if i == prev || i == ear || i == next {
            continue;
        }
        let p = points[idx];
        // Duplicates of the corner points sit on the boundary, not inside.
        if p == a || p == b || p == c {
            continue;
        }
        if point_in_triangle(p, a, b, c) {
            return false;
        }
    }
    true
}

/// Strict interior test via same-side cross products.
fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    /// Twice the unsigned area covered by a triangulation.
    fn covered_area(points: &[Point], tris: &[[usize; 3]]) -> f64 {
        tris.iter()
            .map(|&[a, b, c]| cross(points[a], points[b], points[c]).abs())
            .sum()
    }

    #[test]
    fn triangle_passes_through() {
        let p = pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
        assert_eq!(triangulate(&p), vec![[0, 1, 2]]);
    }

    #[test]
    fn square_yields_two_triangles() {
        let p = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let tris = triangulate(&p);
        assert_eq!(tris.len(), 2);
        assert_eq!(covered_area(&p, &tris), 32.0);
    }

    #[test]
    fn winding_does_not_change_coverage() {
        let cw = pts(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
        let ccw = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let a = covered_area(&cw, &triangulate(&cw));
        let b = covered_area(&ccw, &triangulate(&ccw));
        assert_eq!(a, b);
    }

    #[test]
    fn concave_polygon_stays_inside() {
        // An L-shape: the reflex corner at (2, 2) must never be an ear tip
        // of a triangle that spills outside the polygon.
        let p = pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 4.0),
            (0.0, 4.0),
        ]);
        let tris = triangulate(&p);
        assert_eq!(tris.len(), 4);
        // Area of the L is 12, doubled by the shoelace convention.
        assert_eq!(covered_area(&p, &tris), 24.0);
    }

    #[test]
    fn collinear_vertex_is_drained() {
        let p = pts(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let tris = triangulate(&p);
        assert_eq!(tris.len(), 3);
        assert_eq!(covered_area(&p, &tris), 32.0);
    }

    #[test]
    fn too_few_points_yield_nothing() {
        assert!(triangulate(&pts(&[(0.0, 0.0), (1.0, 1.0)])).is_empty());
        assert!(triangulate(&[]).is_empty());
    }
}
