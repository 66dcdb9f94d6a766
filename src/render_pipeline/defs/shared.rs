use std::sync::{Arc, Mutex};

use crate::render_pipeline::defs::types::RenderingDef;

/// Shared handle over a mutable [`RenderingDef`].
///
/// The settings UI edits through [`edit`](Self::edit) while render calls
/// take a value copy through [`snapshot`](Self::snapshot) at entry, so a
/// render sees consistent settings for its whole duration and an edit
/// never waits on a pixel loop. Renders against different handles are
/// fully independent.
#[derive(Debug, Clone)]
pub struct SharedRenderingDef {
    inner: Arc<Mutex<RenderingDef>>,
}

impl SharedRenderingDef {
    pub fn new(def: RenderingDef) -> Self {
        Self {
            inner: Arc::new(Mutex::new(def)),
        }
    }

    /// A consistent value copy of the current settings.
    pub fn snapshot(&self) -> RenderingDef {
        self.lock().clone()
    }

    /// Applies one atomic edit to the settings.
    pub fn edit<F>(&self, f: F)
    where
        F: FnOnce(&mut RenderingDef),
    {
        f(&mut self.lock());
    }

    /// Replaces the settings wholesale, e.g. after reloading saved ones.
    pub fn replace(&self, def: RenderingDef) {
        *self.lock() = def;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RenderingDef> {
        // A panic mid-edit leaves plain data, not a broken invariant.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
