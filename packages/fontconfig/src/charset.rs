//! Character set codec.
//!
//! fontconfig stores character sets as pages: each page covers 256
//! consecutive code points as a bitmap of eight 32-bit words. The
//! codec translates between that representation and a plain
//! `BTreeSet<u32>` of code points.

use std::collections::BTreeSet;
use std::sync::Arc;

use fontconfig_sys as sys;

use crate::error::{Error, Result};
use crate::handle::NativeHandle;
use crate::library::{Fontconfig, LibraryInner};

/// A native set of Unicode code points.
pub struct CharSet {
    fc: Arc<LibraryInner>,
    handle: NativeHandle<sys::FcCharSet>,
}

impl Drop for CharSet {
    fn drop(&mut self) {
        let ptr = self.handle.take();
        if !ptr.is_null() && self.handle.owned() {
            unsafe { (self.fc.api().fc_char_set_destroy)(ptr) };
        }
    }
}

impl CharSet {
    /// Allocates an empty character set (`FcCharSetCreate`).
    pub fn create(fc: &Fontconfig) -> Result<CharSet> {
        let ptr = unsafe { (fc.inner.api().fc_char_set_create)() };
        if ptr.is_null() {
            return Err(Error::native("FcCharSetCreate"));
        }
        Ok(CharSet {
            fc: Arc::clone(&fc.inner),
            handle: NativeHandle::new(ptr, true),
        })
    }

    /// Encodes a set of code points into a native character set. If an
    /// insertion is rejected the partially built native set is
    /// released before the error is returned.
    pub fn from_codepoints<I>(fc: &Fontconfig, codepoints: I) -> Result<CharSet>
    where
        I: IntoIterator<Item = u32>,
    {
        let set = CharSet::create(fc)?;
        for cp in codepoints {
            set.add(cp)?;
        }
        Ok(set)
    }

    /// Adds one code point (`FcCharSetAddChar`).
    pub fn add(&self, codepoint: u32) -> Result<()> {
        let ok = unsafe { (self.fc.api().fc_char_set_add_char)(self.as_raw(), codepoint) };
        if ok == sys::FcFalse {
            return Err(Error::native("FcCharSetAddChar"));
        }
        Ok(())
    }

    /// Number of code points in the set (`FcCharSetCount`).
    pub fn len(&self) -> u32 {
        unsafe { (self.fc.api().fc_char_set_count)(self.as_raw()) }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes the native paged bitmap back into a set of code points.
    ///
    /// The page cursor can signal completion through either channel:
    /// the returned page base or the next-page cursor out-parameter
    /// may independently be `FC_CHARSET_DONE`. A base sentinel means
    /// the page just returned is not valid; a cursor sentinel means
    /// the page is valid but is the last one. Both checks are
    /// required: skipping either drops the final page or never
    /// terminates.
    pub fn codepoints(&self) -> BTreeSet<u32> {
        let api = self.fc.api();
        let ptr = self.as_raw();
        let mut out = BTreeSet::new();
        let mut map = [0 as sys::FcChar32; sys::FC_CHARSET_MAP_SIZE];
        let mut next: sys::FcChar32 = 0;
        let mut base =
            unsafe { (api.fc_char_set_first_page)(ptr, map.as_mut_ptr(), &mut next) };
        loop {
            if base == sys::FC_CHARSET_DONE {
                break;
            }
            out.extend(page_codepoints(base, &map));
            if next == sys::FC_CHARSET_DONE {
                break;
            }
            base = unsafe { (api.fc_char_set_next_page)(ptr, map.as_mut_ptr(), &mut next) };
        }
        out
    }

    pub fn as_raw(&self) -> *mut sys::FcCharSet {
        self.handle.get()
    }
}

/// Expands one page bitmap: bit `j` of word `i` set means code point
/// `base + i * 32 + j` is a member.
fn page_codepoints(
    base: u32,
    map: &[sys::FcChar32; sys::FC_CHARSET_MAP_SIZE],
) -> impl Iterator<Item = u32> + '_ {
    map.iter().enumerate().flat_map(move |(word, bits)| {
        (0..32u32).filter_map(move |bit| (bits & (1 << bit) != 0).then_some(base + word as u32 * 32 + bit))
    })
}
