//! In-process record of analyzed props, shared by the analyzer and the report generator.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::types::Prop;

/// Cloneable handle to the props analyzed by this process. Nothing is written to disk.
#[derive(Clone, Default)]
pub struct PropLedger {
    props: Arc<Mutex<Vec<Prop>>>,
}

impl PropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends props in analysis order.
    pub fn record(&self, props: &[Prop]) {
        self.lock().extend_from_slice(props);
    }

    /// Copy of all recorded props, oldest first.
    pub fn snapshot(&self) -> Vec<Prop> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Prop>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.props.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
