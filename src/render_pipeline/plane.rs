//! Plane addressing module
//!
//! This module describes the shape of a pixel set, identifies single 2D
//! slices within it and defines the contract for fetching raw plane data.

mod source;
pub mod types;

pub use source::PlaneSource;
pub use types::{PixelsDimensions, Plane2D, PlaneDef, PlaneSlice};
