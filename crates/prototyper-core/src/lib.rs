//! # Prototyper Core
//!
//! Core types shared by the Prototyper crates.
//! Provides stable object identifiers, page geometry, stroke/fill/text
//! styles and the error taxonomy used by the document and command layer.

pub mod error;
pub mod geometry;
pub mod id;
pub mod style;
pub mod types;

pub use error::{Error, ModelError, RegistryError, Result};
pub use geometry::{Point, Segment, POINT_EPSILON};
pub use id::ObjectId;
pub use style::{Brush, BrushStyle, Color, Font, Pen, PenStyle, TextAlignment, TextStyle};
pub use types::{shared, Shared};
