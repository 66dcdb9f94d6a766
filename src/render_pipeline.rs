//! Plane rendering pipeline module
//!
//! This module provides a structured approach to turning raw intensity
//! planes into displayable RGB images, with separate modules for plane
//! addressing, quantization, codomain transforms, rendering settings and
//! the render loops themselves.

pub mod codomain;
pub mod common;
pub mod defs;
pub mod plane;
pub mod quantum;
pub mod render;

pub use common::{
    DataSourceError,
    QuantizationError,
    RenderError,
    Result,
};

pub use plane::{
    PixelsDimensions,
    Plane2D,
    PlaneDef,
    PlaneSlice,
    PlaneSource,
};

pub use quantum::{
    QuantumMap,
    QuantumStrategy,
};

pub use codomain::{
    CodomainChain,
    CodomainMap,
    ContrastStretchingContext,
    PlaneSlicingContext,
};

pub use defs::{
    ChannelBinding,
    RenderingDef,
    RenderingDefBuilder,
    RenderingModel,
    SharedRenderingDef,
};

pub use render::{
    B_BAND,
    G_BAND,
    R_BAND,
    RenderedImage,
    Renderer,
};
