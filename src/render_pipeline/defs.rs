//! Rendering settings module
//!
//! Per-channel bindings and the aggregate rendering definition that the
//! render loops read, plus the shared handle that serializes interactive
//! edits against in-flight renders.

mod shared;
pub mod types;

pub use shared::SharedRenderingDef;
pub use types::{ChannelBinding, RenderingDef, RenderingDefBuilder, RenderingModel};
