//! Process-wide interning of normalized tuples.
//!
//! Every [`TonalValue`](super::TonalValue) points into this registry, so two
//! values built from the same normalized tuple share one address. Entries
//! live for the rest of the process.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use once_cell::sync::Lazy;

use super::TonalTuple;

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

#[derive(Debug, Default)]
pub struct Registry {
    entries: Mutex<HashMap<TonalTuple, &'static TonalTuple>>,
}
impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    // Inserts are whole: a poisoned map is still consistent.
    fn entries(&self) -> MutexGuard<'_, HashMap<TonalTuple, &'static TonalTuple>> {
        self.entries.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            log::warn!("tonal registry lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Get the shared instance of the tuple, inserting it at first call.
    ///
    /// The tuple is stored as given: normalization is on the caller.
    pub fn intern(&self, tuple: TonalTuple) -> &'static TonalTuple {
        let mut entries = self.entries();
        *entries.entry(tuple).or_insert_with(|| {
            log::debug!("interning tonal tuple {tuple}");
            Box::leak(Box::new(tuple))
        })
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Forget every entry.
    ///
    /// Values created before still work and compare equal to new ones, but
    /// they are no longer the same instance. Meant for test harnesses.
    pub fn reset(&self) {
        let mut entries = self.entries();
        log::warn!("resetting tonal registry with {} entries", entries.len());
        entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;
    use crate::primitives::TonalTuple;

    #[test]
    fn intern_returns_same_instance() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        let a = registry.intern(TonalTuple::new(2, 4));
        let b = registry.intern(TonalTuple::new(2, 4));
        assert!(std::ptr::eq(a, b));
        assert_eq!(registry.len(), 1);

        let c = registry.intern(TonalTuple::qualified(2, 4, 0));
        assert!(!std::ptr::eq(a, c));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn reset_keeps_old_entries_valid() {
        let registry = Registry::new();
        let old = registry.intern(TonalTuple::new(4, 7));
        registry.reset();
        assert_eq!(registry.len(), 0);
        let new = registry.intern(TonalTuple::new(4, 7));
        assert_eq!(old, new);
        assert!(!std::ptr::eq(old, new));
    }
}
