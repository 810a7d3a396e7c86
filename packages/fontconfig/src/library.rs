//! The library entry object.

use std::sync::Arc;

use fontconfig_sys as sys;

use crate::blanks::BlanksInner;
use crate::config::ConfigInner;
use crate::error::{Error, Result};
use crate::fontset::FontSetInner;
use crate::pattern::PatternInner;
use crate::registry::Registry;

/// Shared state behind every wrapper: the bound call table and one
/// identity registry per wrapper kind.
pub(crate) struct LibraryInner {
    lib: sys::FcLibrary,
    pub(crate) configs: Registry<ConfigInner>,
    pub(crate) patterns: Registry<PatternInner>,
    pub(crate) font_sets: Registry<FontSetInner>,
    pub(crate) blanks: Registry<BlanksInner>,
}

impl LibraryInner {
    pub(crate) fn api(&self) -> &sys::FcApi {
        self.lib.api()
    }
}

/// A loaded and initialized fontconfig library.
///
/// Cloning is cheap (a shared handle). All wrapper objects created
/// through a `Fontconfig` keep the library loaded until they are
/// dropped.
///
/// # Process-wide state
///
/// fontconfig keeps mutable process-global state: the current config
/// and the application font sets. The wrapper adds no locking around
/// it; applications touching that state from multiple threads must
/// serialize those calls themselves.
#[derive(Clone)]
pub struct Fontconfig {
    pub(crate) inner: Arc<LibraryInner>,
}

impl Fontconfig {
    /// Loads the system fontconfig shared object and initializes it
    /// (`FcInit`).
    pub fn open() -> Result<Self> {
        let lib = sys::FcLibrary::open().map_err(|err| Error::LibraryLoad(err.to_string()))?;
        Self::open_with(lib)
    }

    /// Initializes fontconfig through an already-bound call table.
    ///
    /// This is the seam for loading from a non-default path
    /// ([`sys::FcLibrary::open_path`]) or for substituting the call
    /// table entirely ([`sys::FcLibrary::from_api`]).
    pub fn open_with(lib: sys::FcLibrary) -> Result<Self> {
        let fc = Self {
            inner: Arc::new(LibraryInner {
                lib,
                configs: Registry::new(),
                patterns: Registry::new(),
                font_sets: Registry::new(),
                blanks: Registry::new(),
            }),
        };
        if unsafe { (fc.inner.api().fc_init)() } == sys::FcFalse {
            return Err(Error::native("FcInit"));
        }
        log::debug!("fontconfig initialized, version {}", fc.version());
        Ok(fc)
    }

    /// The library version as `FcGetVersion` reports it
    /// (major * 10000 + minor * 100 + revision).
    pub fn version(&self) -> i32 {
        unsafe { (self.inner.api().fc_get_version)() }
    }

    /// Forces fontconfig to reload its configuration
    /// (`FcInitReinitialize`).
    pub fn reinitialize(&self) -> Result<()> {
        if unsafe { (self.inner.api().fc_init_reinitialize)() } == sys::FcFalse {
            return Err(Error::native("FcInitReinitialize"));
        }
        Ok(())
    }

    /// Checks the configuration timestamps and rebuilds stale state
    /// (`FcInitBringUptoDate`).
    pub fn bring_up_to_date(&self) -> Result<()> {
        if unsafe { (self.inner.api().fc_init_bring_upto_date)() } == sys::FcFalse {
            return Err(Error::native("FcInitBringUptoDate"));
        }
        Ok(())
    }

    /// Shuts the native library down (`FcFini`).
    ///
    /// # Safety
    ///
    /// Every wrapper object created through this library (configs,
    /// patterns, font sets, blanks, char sets, string sets and lists)
    /// must already be dropped; after `fini` their native handles are
    /// gone and any remaining wrapper would release freed memory.
    pub unsafe fn fini(&self) {
        log::debug!("shutting fontconfig down");
        unsafe { (self.inner.api().fc_fini)() }
    }
}
