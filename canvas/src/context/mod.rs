// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [Context] drawing API and its supporting types.

// Attach sources.
pub mod draw_mode;
pub mod drawing_context;
pub mod image_data;

// Re-export.
pub use draw_mode::*;
pub use drawing_context::*;
pub use image_data::*;
