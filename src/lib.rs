//! Rendering engine for multi-dimensional microscopy pixel sets.
//!
//! Turns raw per-channel intensity planes into displayable 8-bit sRGB
//! images through per-channel quantization, a composable codomain
//! transform chain, and per-channel color compositing.

pub mod logger;
pub mod render_pipeline;
