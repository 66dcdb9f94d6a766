//! Quantization module
//!
//! Maps raw pixel intensities of arbitrary range into a bounded discrete
//! range (by default 0..=255) through a configurable input window and a
//! choice of value map families.

mod strategy;
pub mod types;


pub use strategy::QuantumStrategy;
pub use types::QuantumMap;
