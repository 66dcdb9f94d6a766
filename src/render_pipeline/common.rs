//! Common utilities module
//!
//! This module contains the error types shared across the rendering
//! pipeline.

pub mod error;

pub use error::{DataSourceError, QuantizationError, RenderError, Result};
