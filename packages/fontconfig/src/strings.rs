//! String set and string list bridge.
//!
//! `FcStrSet` is an unordered native string collection; `FcStrList` is
//! a one-shot forward cursor over one. The bridge turns the cursor
//! protocol into an [`Iterator`] yielding owned `String`s.

use std::any::Any;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::sync::Arc;

use fontconfig_sys as sys;

use crate::error::{Error, Result};
use crate::handle::NativeHandle;
use crate::library::{Fontconfig, LibraryInner};

pub(crate) struct StrSetInner {
    fc: Arc<LibraryInner>,
    handle: NativeHandle<sys::FcStrSet>,
}

impl Drop for StrSetInner {
    fn drop(&mut self) {
        let ptr = self.handle.take();
        if !ptr.is_null() {
            unsafe { (self.fc.api().fc_str_set_destroy)(ptr) };
        }
    }
}

/// An unordered set of strings owned by fontconfig.
#[derive(Clone)]
pub struct StrSet {
    inner: Arc<StrSetInner>,
}

impl StrSet {
    /// Allocates an empty string set (`FcStrSetCreate`).
    pub fn create(fc: &Fontconfig) -> Result<StrSet> {
        let ptr = unsafe { (fc.inner.api().fc_str_set_create)() };
        if ptr.is_null() {
            return Err(Error::native("FcStrSetCreate"));
        }
        Ok(StrSet {
            inner: Arc::new(StrSetInner {
                fc: Arc::clone(&fc.inner),
                handle: NativeHandle::new(ptr, true),
            }),
        })
    }

    /// Builds a native string set from anything yielding strings. The
    /// partially built set is released if an insertion fails.
    pub fn from_strings<I, S>(fc: &Fontconfig, strings: I) -> Result<StrSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = StrSet::create(fc)?;
        for s in strings {
            set.add(s.as_ref())?;
        }
        Ok(set)
    }

    /// Inserts one string (`FcStrSetAdd`). fontconfig copies the bytes
    /// during the call; the argument only needs to outlive it.
    pub fn add(&self, s: &str) -> Result<()> {
        let c = CString::new(s)?;
        let ok = unsafe {
            (self.inner.fc.api().fc_str_set_add)(self.as_raw(), c.as_ptr() as *const sys::FcChar8)
        };
        if ok == sys::FcFalse {
            return Err(Error::native("FcStrSetAdd"));
        }
        Ok(())
    }

    /// Opens a fresh cursor over the set's contents
    /// (`FcStrListCreate`).
    pub fn list(&self) -> Result<StrList> {
        let ptr = unsafe { (self.inner.fc.api().fc_str_list_create)(self.as_raw()) };
        if ptr.is_null() {
            return Err(Error::native("FcStrListCreate"));
        }
        Ok(StrList::from_raw(
            Arc::clone(&self.inner.fc),
            ptr,
            Some(Arc::clone(&self.inner) as Arc<dyn Any + Send + Sync>),
        ))
    }

    pub fn as_raw(&self) -> *mut sys::FcStrSet {
        self.inner.handle.get()
    }
}

/// A single-pass forward cursor over a native string collection.
///
/// Draining is one-way: once [`next`](Self::next) has returned `None`
/// it keeps returning `None`. [`first`](Self::first) rewinds the
/// cursor to the start.
pub struct StrList {
    fc: Arc<LibraryInner>,
    handle: NativeHandle<sys::FcStrList>,
    /// Keeps the collection being iterated alive for the cursor's
    /// lifetime (the yielded pointers belong to it).
    _owner: Option<Arc<dyn Any + Send + Sync>>,
}

impl Drop for StrList {
    fn drop(&mut self) {
        let ptr = self.handle.take();
        if !ptr.is_null() {
            unsafe { (self.fc.api().fc_str_list_done)(ptr) };
        }
    }
}

impl StrList {
    pub(crate) fn from_raw(
        fc: Arc<LibraryInner>,
        ptr: *mut sys::FcStrList,
        owner: Option<Arc<dyn Any + Send + Sync>>,
    ) -> StrList {
        StrList {
            fc,
            handle: NativeHandle::new(ptr, true),
            _owner: owner,
        }
    }

    /// Rewinds the cursor to the start (`FcStrListFirst`).
    pub fn first(&mut self) {
        unsafe { (self.fc.api().fc_str_list_first)(self.handle.get()) }
    }

    /// Yields the next string, or `None` once the cursor hits the
    /// terminal null sentinel (`FcStrListNext`). The native bytes are
    /// copied out immediately; they stay owned by the list.
    pub fn next(&mut self) -> Option<String> {
        let raw = unsafe { (self.fc.api().fc_str_list_next)(self.handle.get()) };
        if raw.is_null() {
            return None;
        }
        let s = unsafe { CStr::from_ptr(raw as *const c_char) };
        Some(s.to_string_lossy().into_owned())
    }

    /// Drains the remaining entries into a vector, in enumeration
    /// order, without deduplication or sorting.
    pub fn to_vec(mut self) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(s) = self.next() {
            out.push(s);
        }
        out
    }
}

impl Iterator for StrList {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        StrList::next(self)
    }
}

impl Fontconfig {
    /// Expands a filename the way fontconfig does (leading `~` and
    /// friends) via `FcStrCopyFilename`. The native result is copied
    /// into a `String` and released with `FcStrFree`.
    pub fn copy_filename(&self, name: &str) -> Result<String> {
        let c = CString::new(name)?;
        let api = self.inner.api();
        let raw = unsafe { (api.fc_str_copy_filename)(c.as_ptr() as *const sys::FcChar8) };
        if raw.is_null() {
            return Err(Error::native("FcStrCopyFilename"));
        }
        let out = unsafe { CStr::from_ptr(raw as *const c_char) }
            .to_string_lossy()
            .into_owned();
        unsafe { (api.fc_str_free)(raw) };
        Ok(out)
    }
}
