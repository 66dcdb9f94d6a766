use crate::render_pipeline::common::error::DataSourceError;
use crate::render_pipeline::plane::types::{Plane2D, PlaneDef};

/// Supplies raw plane data, one channel at a time.
///
/// Implementations may block (the backing store is typically remote);
/// the renderer calls this sequentially per channel and never retries.
pub trait PlaneSource {
    fn plane(&self, channel: usize, def: &PlaneDef) -> Result<Plane2D, DataSourceError>;
}
