//! Native handle bookkeeping.

use std::sync::atomic::{AtomicPtr, Ordering};

/// An opaque foreign pointer plus the created-by-us flag.
///
/// `owned == true` means this process allocated (or took a reference
/// to) the native object and must release it exactly once;
/// `owned == false` means the pointer is a view into memory owned by
/// another native object and must never be released here.
///
/// The pointer lives in an `AtomicPtr` so that [`take`](Self::take)
/// can null it out exactly once even if finalization races with
/// another thread.
pub(crate) struct NativeHandle<T> {
    ptr: AtomicPtr<T>,
    owned: bool,
}

impl<T> NativeHandle<T> {
    pub(crate) fn new(ptr: *mut T, owned: bool) -> Self {
        Self {
            ptr: AtomicPtr::new(ptr),
            owned,
        }
    }

    pub(crate) fn owned(&self) -> bool {
        self.owned
    }

    /// The current pointer. Null only after [`take`](Self::take).
    pub(crate) fn get(&self) -> *mut T {
        self.ptr.load(Ordering::Acquire)
    }

    /// Swaps the null sentinel in and returns the previous pointer.
    /// The first caller gets the live pointer; everyone after gets
    /// null, which makes release idempotent.
    pub(crate) fn take(&self) -> *mut T {
        self.ptr.swap(std::ptr::null_mut(), Ordering::AcqRel)
    }
}
