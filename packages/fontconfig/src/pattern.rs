//! Font pattern wrapper.

use std::any::Any;
use std::sync::Arc;

use fontconfig_sys as sys;

use crate::error::{Error, Result};
use crate::handle::NativeHandle;
use crate::library::{Fontconfig, LibraryInner};
use crate::registry::Registered;

pub(crate) struct PatternInner {
    pub(crate) fc: Arc<LibraryInner>,
    pub(crate) handle: NativeHandle<sys::FcPattern>,
    /// Keeps the native object that owns a borrowed pattern alive
    /// (e.g. the FontSet whose array the pattern came from).
    _owner: Option<Arc<dyn Any + Send + Sync>>,
}

impl Registered for PatternInner {
    fn owned(&self) -> bool {
        self.handle.owned()
    }
}

impl Drop for PatternInner {
    fn drop(&mut self) {
        let ptr = self.handle.take();
        if ptr.is_null() {
            return;
        }
        self.fc.patterns.prune(ptr as usize);
        if self.handle.owned() {
            log::trace!("destroying FcPattern {ptr:p}");
            unsafe { (self.fc.api().fc_pattern_destroy)(ptr) };
        }
    }
}

/// A fontconfig pattern: a set of typed font properties used both as
/// match queries and as match results.
///
/// Cloning shares the same wrapper; use [`duplicate`](Self::duplicate)
/// for a distinct native copy.
#[derive(Clone)]
pub struct Pattern {
    pub(crate) inner: Arc<PatternInner>,
}

impl Pattern {
    /// Allocates a fresh empty pattern (`FcPatternCreate`).
    pub fn create(fc: &Fontconfig) -> Result<Pattern> {
        let ptr = unsafe { (fc.inner.api().fc_pattern_create)() };
        if ptr.is_null() {
            return Err(Error::native("FcPatternCreate"));
        }
        Ok(Pattern::from_raw(&fc.inner, ptr, true, None))
    }

    /// Makes an independent native copy of this pattern
    /// (`FcPatternDuplicate`).
    pub fn duplicate(&self) -> Result<Pattern> {
        let ptr = unsafe { (self.inner.fc.api().fc_pattern_duplicate)(self.as_raw()) };
        if ptr.is_null() {
            return Err(Error::native("FcPatternDuplicate"));
        }
        Ok(Pattern::from_raw(&self.inner.fc, ptr, true, None))
    }

    /// Resolves `ptr` through the pattern registry, constructing a new
    /// wrapper only if none is live. For `owned` handles a registry
    /// hit releases the surplus native reference.
    pub(crate) fn from_raw(
        fc: &Arc<LibraryInner>,
        ptr: *mut sys::FcPattern,
        owned: bool,
        owner: Option<Arc<dyn Any + Send + Sync>>,
    ) -> Pattern {
        let inner = fc.patterns.wrap(
            ptr as usize,
            owned,
            || {
                if owned {
                    unsafe { (fc.api().fc_pattern_destroy)(ptr) };
                }
            },
            || {
                Arc::new(PatternInner {
                    fc: Arc::clone(fc),
                    handle: NativeHandle::new(ptr, owned),
                    _owner: owner,
                })
            },
        );
        Pattern { inner }
    }

    /// The underlying native pointer, for calls not covered by the
    /// wrapper. The pointer stays owned by this wrapper.
    pub fn as_raw(&self) -> *mut sys::FcPattern {
        self.inner.handle.get()
    }

    /// Whether two handles refer to the same wrapper object (and
    /// therefore, by the registry invariant, the same native pattern).
    pub fn ptr_eq(&self, other: &Pattern) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("ptr", &self.as_raw())
            .field("owned", &self.inner.handle.owned())
            .finish()
    }
}
