//! Rendering module
//!
//! The render loops: model dispatch, per-pixel quantize/transform/
//! composite passes and the output image buffer they fill.

mod color;
mod image;
mod renderer;


pub use image::{RenderedImage, B_BAND, G_BAND, R_BAND};
pub use renderer::Renderer;
