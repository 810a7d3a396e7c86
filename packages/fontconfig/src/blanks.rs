//! Blanks wrapper: code points permitted to map to blank glyphs.

use std::any::Any;
use std::sync::Arc;

use fontconfig_sys as sys;

use crate::error::{Error, Result};
use crate::handle::NativeHandle;
use crate::library::{Fontconfig, LibraryInner};
use crate::registry::Registered;

pub(crate) struct BlanksInner {
    fc: Arc<LibraryInner>,
    handle: NativeHandle<sys::FcBlanks>,
    _owner: Option<Arc<dyn Any + Send + Sync>>,
}

impl Registered for BlanksInner {
    fn owned(&self) -> bool {
        self.handle.owned()
    }
}

impl Drop for BlanksInner {
    fn drop(&mut self) {
        let ptr = self.handle.take();
        if ptr.is_null() {
            return;
        }
        self.fc.blanks.prune(ptr as usize);
        if self.handle.owned() {
            log::trace!("destroying FcBlanks {ptr:p}");
            unsafe { (self.fc.api().fc_blanks_destroy)(ptr) };
        }
    }
}

/// A set of code points that are allowed to render as blank glyphs.
#[derive(Clone)]
pub struct Blanks {
    pub(crate) inner: Arc<BlanksInner>,
}

impl Blanks {
    /// Allocates an empty blanks set (`FcBlanksCreate`).
    pub fn create(fc: &Fontconfig) -> Result<Blanks> {
        let ptr = unsafe { (fc.inner.api().fc_blanks_create)() };
        if ptr.is_null() {
            return Err(Error::native("FcBlanksCreate"));
        }
        Ok(Blanks::from_raw(&fc.inner, ptr, true, None))
    }

    pub(crate) fn from_raw(
        fc: &Arc<LibraryInner>,
        ptr: *mut sys::FcBlanks,
        owned: bool,
        owner: Option<Arc<dyn Any + Send + Sync>>,
    ) -> Blanks {
        let inner = fc.blanks.wrap(
            ptr as usize,
            owned,
            || {
                if owned {
                    unsafe { (fc.api().fc_blanks_destroy)(ptr) };
                }
            },
            || {
                Arc::new(BlanksInner {
                    fc: Arc::clone(fc),
                    handle: NativeHandle::new(ptr, owned),
                    _owner: owner,
                })
            },
        );
        Blanks { inner }
    }

    /// Adds a code point to the set (`FcBlanksAdd`).
    pub fn add(&self, ch: char) -> Result<()> {
        let ok = unsafe { (self.inner.fc.api().fc_blanks_add)(self.as_raw(), ch as u32) };
        if ok == sys::FcFalse {
            return Err(Error::native("FcBlanksAdd"));
        }
        Ok(())
    }

    /// Whether a code point is in the set (`FcBlanksIsMember`).
    pub fn is_member(&self, ch: char) -> bool {
        (unsafe { (self.inner.fc.api().fc_blanks_is_member)(self.as_raw(), ch as u32) })
            != sys::FcFalse
    }

    pub fn as_raw(&self) -> *mut sys::FcBlanks {
        self.inner.handle.get()
    }

    /// Whether two handles refer to the same wrapper object.
    pub fn ptr_eq(&self, other: &Blanks) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
