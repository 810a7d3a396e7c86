//! Font set wrapper and enumeration.

use std::any::Any;
use std::sync::Arc;

use fontconfig_sys as sys;

use crate::error::{Error, Result};
use crate::handle::NativeHandle;
use crate::library::{Fontconfig, LibraryInner};
use crate::pattern::Pattern;
use crate::registry::Registered;

pub(crate) struct FontSetInner {
    pub(crate) fc: Arc<LibraryInner>,
    pub(crate) handle: NativeHandle<sys::FcFontSet>,
    _owner: Option<Arc<dyn Any + Send + Sync>>,
}

impl Registered for FontSetInner {
    fn owned(&self) -> bool {
        self.handle.owned()
    }
}

impl Drop for FontSetInner {
    fn drop(&mut self) {
        let ptr = self.handle.take();
        if ptr.is_null() {
            return;
        }
        self.fc.font_sets.prune(ptr as usize);
        if self.handle.owned() {
            log::trace!("destroying FcFontSet {ptr:p}");
            unsafe { (self.fc.api().fc_font_set_destroy)(ptr) };
        }
    }
}

/// An ordered collection of patterns, typically the result of a font
/// scan or a config's system/application set.
#[derive(Clone)]
pub struct FontSet {
    pub(crate) inner: Arc<FontSetInner>,
}

impl FontSet {
    /// Allocates an empty font set (`FcFontSetCreate`).
    pub fn create(fc: &Fontconfig) -> Result<FontSet> {
        let ptr = unsafe { (fc.inner.api().fc_font_set_create)() };
        if ptr.is_null() {
            return Err(Error::native("FcFontSetCreate"));
        }
        Ok(FontSet::from_raw(&fc.inner, ptr, true, None))
    }

    pub(crate) fn from_raw(
        fc: &Arc<LibraryInner>,
        ptr: *mut sys::FcFontSet,
        owned: bool,
        owner: Option<Arc<dyn Any + Send + Sync>>,
    ) -> FontSet {
        let inner = fc.font_sets.wrap(
            ptr as usize,
            owned,
            || {
                if owned {
                    unsafe { (fc.api().fc_font_set_destroy)(ptr) };
                }
            },
            || {
                Arc::new(FontSetInner {
                    fc: Arc::clone(fc),
                    handle: NativeHandle::new(ptr, owned),
                    _owner: owner,
                })
            },
        );
        FontSet { inner }
    }

    /// Appends a pattern to the set (`FcFontSetAdd`).
    ///
    /// The native call adopts a pattern reference, so an extra
    /// reference is taken first; the wrapper and the set then each own
    /// exactly one.
    pub fn add(&self, pattern: &Pattern) -> Result<()> {
        let api = self.inner.fc.api();
        let pat = pattern.as_raw();
        unsafe { (api.fc_pattern_reference)(pat) };
        let ok = unsafe { (api.fc_font_set_add)(self.as_raw(), pat) };
        if ok == sys::FcFalse {
            // Undo the reference the set failed to adopt.
            unsafe { (api.fc_pattern_destroy)(pat) };
            return Err(Error::native("FcFontSetAdd"));
        }
        Ok(())
    }

    /// Number of patterns currently in the set.
    pub fn len(&self) -> usize {
        let ptr = self.as_raw();
        if ptr.is_null() {
            return 0;
        }
        unsafe { (*ptr).nfont.max(0) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the set's patterns in array order.
    ///
    /// Each yielded [`Pattern`] is a borrowed, registry-resolved view:
    /// the set keeps owning the underlying objects, and the patterns
    /// keep the set alive. The iterator is finite and restartable; a
    /// fresh call re-reads the native array from index 0.
    pub fn iter(&self) -> FontSetIter {
        FontSetIter {
            set: self.clone(),
            index: 0,
        }
    }

    pub fn as_raw(&self) -> *mut sys::FcFontSet {
        self.inner.handle.get()
    }

    /// Whether two handles refer to the same wrapper object.
    pub fn ptr_eq(&self, other: &FontSet) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<'a> IntoIterator for &'a FontSet {
    type Item = Pattern;
    type IntoIter = FontSetIter;

    fn into_iter(self) -> FontSetIter {
        self.iter()
    }
}

/// Lazy enumeration over a [`FontSet`]'s pattern array.
pub struct FontSetIter {
    set: FontSet,
    index: usize,
}

impl Iterator for FontSetIter {
    type Item = Pattern;

    fn next(&mut self) -> Option<Pattern> {
        let inner = &self.set.inner;
        let ptr = self.set.as_raw();
        if ptr.is_null() {
            return None;
        }
        loop {
            let count = unsafe { (*ptr).nfont.max(0) as usize };
            if self.index >= count {
                return None;
            }
            let pat = unsafe { *(*ptr).fonts.add(self.index) };
            self.index += 1;
            if pat.is_null() {
                continue;
            }
            return Some(Pattern::from_raw(
                &inner.fc,
                pat,
                false,
                Some(Arc::clone(&self.set.inner) as Arc<dyn Any + Send + Sync>),
            ));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len().saturating_sub(self.index);
        (0, Some(remaining))
    }
}
