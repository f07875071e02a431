// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [Path] vertex list and its stroke / fill rasterizers.

use kurbo::{Affine, Point, Rect};
use smallvec::SmallVec;

use crate::geometry::{bresenham, earclip};

/// A path vertex. `connect` records whether the segment arriving at this
/// vertex is drawn when stroking (`line_to`) or skipped (`move_to`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathVertex {
    pub point: Point,
    pub connect: bool,
}

/// An in-progress path: the vertex list built up by `move_to` / `line_to` /
/// `close` between `begin_path` and a `fill` or `stroke` call.
///
/// Vertices are stored untransformed; the drawing context applies its current
/// matrix via [Path::transform] at rasterization time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    vertices: Vec<PathVertex>,
}

/// Below this bounding-box size (in pixels, per axis) a fill collapses to a
/// single pixel at the centroid. Slightly above 1.0 so that hairline shapes
/// produced by rounding still register.
const TINY_FILL_EXTENT: f64 = 1.3;

impl Path {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    pub fn len(&self) -> usize { self.vertices.len() }

    pub fn vertices(&self) -> &[PathVertex] { &self.vertices }

    /// Discards all vertices.
    pub fn begin(&mut self) { self.vertices.clear(); }

    /// Starts a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push(PathVertex {
            point: Point::new(x, y),
            connect: false,
        });
    }

    /// Extends the path with a drawn segment to `(x, y)`.
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(PathVertex {
            point: Point::new(x, y),
            connect: true,
        });
    }

    /// Closes the path back to its first vertex. No-op on an empty path.
    pub fn close(&mut self) {
        if let Some(first) = self.vertices.first() {
            let point = first.point;
            self.vertices.push(PathVertex {
                point,
                connect: true,
            });
        }
    }

    /// Appends an axis-aligned rectangle as a closed subpath.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.move_to(x, y);
        self.line_to(x + w, y);
        self.line_to(x + w, y + h);
        self.line_to(x, y + h);
        self.close();
    }

    /// Returns a copy with every vertex mapped through `matrix`.
    #[must_use]
    pub fn transform(&self, matrix: Affine) -> Path {
        Path {
            vertices: self
                .vertices
                .iter()
                .map(|v| PathVertex {
                    point: matrix * v.point,
                    connect: v.connect,
                })
                .collect(),
        }
    }

    /// The axis-aligned bounding box, or `None` for an empty path.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        let first = self.vertices.first()?.point;
        let mut bbox = Rect::new(first.x, first.y, first.x, first.y);
        for v in &self.vertices[1..] {
            bbox.x0 = bbox.x0.min(v.point.x);
            bbox.y0 = bbox.y0.min(v.point.y);
            bbox.x1 = bbox.x1.max(v.point.x);
            bbox.y1 = bbox.y1.max(v.point.y);
        }
        Some(bbox)
    }

    /// Strokes the path outline: every `connect`ed segment is walked with
    /// [bresenham::line] and fed to `sink`.
    pub fn stroke(&self, sink: &mut impl FnMut(i32, i32)) {
        for pair in self.vertices.windows(2) {
            let (cur, next) = (pair[0], pair[1]);
            if next.connect {
                bresenham::line(
                    cur.point.x,
                    cur.point.y,
                    next.point.x,
                    next.point.y,
                    sink,
                );
            }
        }
    }

    /// Fills the path interior.
    ///
    /// The polygon is triangulated and each triangle filled by scanline.
    /// Pixels are clipped to `clip` (the canvas rectangle). Paths whose
    /// bounding box is smaller than ~one pixel on both axes degenerate to a
    /// single pixel at the centroid, so tiny shapes never vanish.
    pub fn fill(&self, clip: Rect, sink: &mut impl FnMut(i32, i32)) {
        let Some(bbox) = self.bounding_box() else {
            return;
        };

        if bbox.width() < TINY_FILL_EXTENT && bbox.height() < TINY_FILL_EXTENT {
            let c = self.centroid();
            sink(c.x.round() as i32, c.y.round() as i32);
            return;
        }

        // The triangulator wants an open ring: drop a repeated closing
        // vertex (and any stutter at the tail).
        let mut ring: Vec<Point> = self.vertices.iter().map(|v| v.point).collect();
        while ring.len() > 1 && ring.last() == ring.first() {
            ring.pop();
        }

        for [a, b, c] in earclip::triangulate(&ring) {
            fill_triangle(ring[a], ring[b], ring[c], clip, sink);
        }
    }

    fn centroid(&self) -> Point {
        let n = self.vertices.len() as f64;
        let mut c = Point::ORIGIN;
        for v in &self.vertices {
            c.x += v.point.x;
            c.y += v.point.y;
        }
        Point::new(c.x / n, c.y / n)
    }
}

/// Scanline fill of one triangle.
///
/// All three edges are walked with Bresenham; the resulting boundary pixels
/// are sorted by row, and each pair of same-row neighbors spans a horizontal
/// run that gets filled inclusively. The spans are clamped to `clip`
/// horizontally, and boundary pixels on rows outside `clip` are discarded up
/// front.
fn fill_triangle(a: Point, b: Point, c: Point, clip: Rect, sink: &mut impl FnMut(i32, i32)) {
    let mut edge: SmallVec<[(i32, i32); 64]> = SmallVec::new();
    {
        let mut push = |x: i32, y: i32| edge.push((x, y));
        // Walk every edge in a canonical direction; Bresenham is not
        // symmetric at ties, and the fill must not depend on winding.
        let key = |p: Point| (p.y.floor(), p.x.floor());
        for (p, q) in [(b, c), (a, c), (a, b)] {
            let (p, q) = if key(p) <= key(q) { (p, q) } else { (q, p) };
            bresenham::line(p.x, p.y, q.x, q.y, &mut push);
        }
    }

    let (y_min, y_max) = (clip.y0 as i32, clip.y1 as i32 - 1);
    let (x_min, x_max) = (clip.x0 as i32, clip.x1 as i32 - 1);
    edge.retain(|&mut (_, y)| y >= y_min && y <= y_max);
    edge.sort_unstable_by(|l, r| l.1.cmp(&r.1).then(l.0.cmp(&r.0)));

    // Every vertex pixel is emitted by both of its incident edges, so the
    // bottom-most pixel always has a same-row twin and the pair loop never
    // strands it.
    for i in 0..edge.len().saturating_sub(1) {
        let (x0, y0) = edge[i];
        let (x1, y1) = edge[i + 1];
        if y0 == y1 {
            for x in x0.max(x_min)..=x1.min(x_max) {
                sink(x, y0);
            }
        } else if (x_min..=x_max).contains(&x0) {
            sink(x0, y0);
        }
    }
}
