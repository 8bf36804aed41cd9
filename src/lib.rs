// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod filters;
pub mod lookup;
pub mod transform;

// Re-export commonly used types
pub use crate::core::errors::{FilterError, LookupError};
pub use crate::core::outcome::{compose_fallible, lift, sequence, traverse, ResultChain};
pub use crate::core::types::{Extent, Image, ImageOp, PixelFormat, Rect, Rgba};

pub use crate::filters::{
    blur, build_pipeline, color_generator, color_overlay, composite_source_over, FilterSpec,
};

pub use crate::lookup::Gazetteer;

pub use crate::transform::{compose, pipeline, Transform};
