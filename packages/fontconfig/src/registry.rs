//! Identity registry: one live wrapper per native address.
//!
//! fontconfig objects carry their own reference counts, and a wrapper
//! that owns a handle releases it exactly once on drop. If two
//! wrappers were ever created for the same live native pointer they
//! would either double-release it or leak one of the library's
//! internal references. The registry prevents that by mapping each
//! native address to a weak reference to its single wrapper.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// Implemented by the wrapper inners tracked in a registry.
pub(crate) trait Registered {
    /// The created-by-us flag this wrapper was registered with.
    fn owned(&self) -> bool;
}

/// Weak-referenced map from native address to the single live wrapper
/// for that address. One registry exists per wrapper kind.
///
/// The mutex covers insert/lookup/prune so that wrapper finalization
/// on another thread cannot race a concurrent wrap request. The
/// registry holds only weak references and is never the reason a
/// wrapper stays alive.
pub(crate) struct Registry<T> {
    entries: Mutex<HashMap<usize, Weak<T>>>,
}

impl<T: Registered> Registry<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the live wrapper for `addr`, or installs the one built
    /// by `create`.
    ///
    /// On a hit, `release_extra` runs (outside the lock) so the caller
    /// can drop whatever native reference it acquired while obtaining
    /// `addr`; without that, the library's internal count would leak.
    ///
    /// # Panics
    ///
    /// If a live wrapper exists for `addr` with a different `owned`
    /// flag. That means ownership bookkeeping went inconsistent
    /// upstream, which is a programmer error, not a runtime condition.
    pub(crate) fn wrap<C, R>(&self, addr: usize, owned: bool, release_extra: R, create: C) -> Arc<T>
    where
        C: FnOnce() -> Arc<T>,
        R: FnOnce(),
    {
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.get(&addr).and_then(Weak::upgrade) {
            assert_eq!(
                existing.owned(),
                owned,
                "live wrapper for native handle {addr:#x} re-registered with a conflicting \
                 ownership flag"
            );
            drop(entries);
            log::trace!("registry hit for native handle {addr:#x}");
            release_extra();
            return existing;
        }
        let wrapper = create();
        entries.insert(addr, Arc::downgrade(&wrapper));
        wrapper
    }

    /// Removes the entry for `addr` if its wrapper is gone. Called
    /// from wrapper drops; a dead entry whose slot was already taken
    /// over by a newer wrapper is left alone.
    pub(crate) fn prune(&self, addr: usize) {
        let mut entries = self.entries.lock();
        if let Some(slot) = entries.get(&addr) {
            if slot.strong_count() == 0 {
                entries.remove(&addr);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
