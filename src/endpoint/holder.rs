//! Process-wide endpoint snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use super::EndpointConfiguration;

/// Holds the effective [`EndpointConfiguration`].
///
/// A resolved configuration is installed as one complete snapshot, so
/// readers see either the previous value or the new one.
#[derive(Debug)]
pub struct EndpointHolder {
    current: RwLock<Arc<EndpointConfiguration>>,
}

impl EndpointHolder {
    /// Create a holder seeded with `initial`.
    pub fn new(initial: EndpointConfiguration) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The configuration currently in effect.
    pub fn current(&self) -> Arc<EndpointConfiguration> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replace the configuration, returning the previous snapshot.
    pub fn install(&self, next: EndpointConfiguration) -> Arc<EndpointConfiguration> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(next))
    }
}

impl Default for EndpointHolder {
    fn default() -> Self {
        Self::new(EndpointConfiguration::vendor())
    }
}
