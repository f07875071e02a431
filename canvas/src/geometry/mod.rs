// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rasterization primitives: line stepping, polygon triangulation, and the
//! [Path] type that ties them together.
//!
//! Everything downstream of this module works in whole pixels; everything
//! upstream (the drawing context) works in continuous coordinates with
//! [kurbo::Affine] transforms. The boundary is crossed here, by flooring.

// Attach sources.
pub mod bresenham;
pub mod earclip;
pub mod path;

// Re-export.
pub use bresenham::*;
pub use earclip::*;
pub use path::*;
