//! Configuration wrapper.

use std::any::Any;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::sync::Arc;

use fontconfig_sys as sys;

use crate::blanks::Blanks;
use crate::error::{Error, Result};
use crate::fontset::FontSet;
use crate::handle::NativeHandle;
use crate::library::{Fontconfig, LibraryInner};
use crate::pattern::Pattern;
use crate::registry::Registered;
use crate::strings::StrList;
use crate::types::{MatchKind, SetName};

pub(crate) struct ConfigInner {
    pub(crate) fc: Arc<LibraryInner>,
    pub(crate) handle: NativeHandle<sys::FcConfig>,
}

impl Registered for ConfigInner {
    fn owned(&self) -> bool {
        self.handle.owned()
    }
}

impl Drop for ConfigInner {
    fn drop(&mut self) {
        let ptr = self.handle.take();
        if ptr.is_null() {
            return;
        }
        self.fc.configs.prune(ptr as usize);
        if self.handle.owned() {
            log::trace!("releasing FcConfig {ptr:p}");
            unsafe { (self.fc.api().fc_config_destroy)(ptr) };
        }
    }
}

/// A fontconfig configuration: the set of font directories, rules and
/// font sets fontconfig matches against.
///
/// Every `Config` wrapper owns one native reference
/// (`FcConfigReference` on wrap, `FcConfigDestroy` on drop), and the
/// identity registry guarantees a single wrapper per native config, so
/// each config is released exactly once no matter how many times it is
/// wrapped.
///
/// # Process-wide state
///
/// [`set_current`](Self::set_current), [`current`](Config::current)
/// and the application-font calls touch fontconfig's process-global
/// state. Concurrent use from several threads must be serialized by
/// the application; the wrapper adds no locking here.
#[derive(Clone)]
pub struct Config {
    pub(crate) inner: Arc<ConfigInner>,
}

impl Config {
    /// Allocates a fresh, empty configuration (`FcConfigCreate`).
    pub fn create(fc: &Fontconfig) -> Result<Config> {
        let ptr = unsafe { (fc.inner.api().fc_config_create)() };
        if ptr.is_null() {
            return Err(Error::native("FcConfigCreate"));
        }
        Ok(Config::from_raw(&fc.inner, ptr))
    }

    /// The process-wide current configuration
    /// (`FcConfigGetCurrent`).
    pub fn current(fc: &Fontconfig) -> Result<Config> {
        let api = fc.inner.api();
        let ptr = unsafe { (api.fc_config_get_current)() };
        if ptr.is_null() {
            return Err(Error::native("FcConfigGetCurrent"));
        }
        // Take our own reference; if the config is already wrapped the
        // registry drops this extra one again.
        let ptr = unsafe { (api.fc_config_reference)(ptr) };
        Ok(Config::from_raw(&fc.inner, ptr))
    }

    /// Wraps an owned config reference through the identity registry.
    fn from_raw(fc: &Arc<LibraryInner>, ptr: *mut sys::FcConfig) -> Config {
        let inner = fc.configs.wrap(
            ptr as usize,
            true,
            || unsafe { (fc.api().fc_config_destroy)(ptr) },
            || {
                Arc::new(ConfigInner {
                    fc: Arc::clone(fc),
                    handle: NativeHandle::new(ptr, true),
                })
            },
        );
        Config { inner }
    }

    /// Makes this the process-wide current configuration
    /// (`FcConfigSetCurrent`).
    pub fn set_current(&self) -> Result<()> {
        self.check(
            unsafe { (self.api().fc_config_set_current)(self.as_raw()) },
            "FcConfigSetCurrent",
        )
    }

    /// Whether the config is in sync with the font directories on disk
    /// (`FcConfigUptoDate`).
    pub fn is_up_to_date(&self) -> bool {
        (unsafe { (self.api().fc_config_upto_date)(self.as_raw()) }) != sys::FcFalse
    }

    /// Scans the configured directories and builds the font sets
    /// (`FcConfigBuildFonts`).
    pub fn build_fonts(&self) -> Result<()> {
        log::debug!("building font sets for FcConfig {:p}", self.as_raw());
        self.check(
            unsafe { (self.api().fc_config_build_fonts)(self.as_raw()) },
            "FcConfigBuildFonts",
        )
    }

    /// The font directories fontconfig scans (`FcConfigGetFontDirs`).
    pub fn font_dirs(&self) -> Result<StrList> {
        self.str_list(self.api().fc_config_get_font_dirs, "FcConfigGetFontDirs")
    }

    /// The configuration directories (`FcConfigGetConfigDirs`).
    pub fn config_dirs(&self) -> Result<StrList> {
        self.str_list(
            self.api().fc_config_get_config_dirs,
            "FcConfigGetConfigDirs",
        )
    }

    /// The font cache directories (`FcConfigGetCacheDirs`).
    pub fn cache_dirs(&self) -> Result<StrList> {
        self.str_list(self.api().fc_config_get_cache_dirs, "FcConfigGetCacheDirs")
    }

    /// The configuration files read to build this config
    /// (`FcConfigGetConfigFiles`).
    pub fn config_files(&self) -> Result<StrList> {
        self.str_list(
            self.api().fc_config_get_config_files,
            "FcConfigGetConfigFiles",
        )
    }

    /// The config's blanks set, if it has one (`FcConfigGetBlanks`).
    /// The returned wrapper is a borrowed view; the config keeps
    /// owning the native object.
    pub fn blanks(&self) -> Option<Blanks> {
        let ptr = unsafe { (self.api().fc_config_get_blanks)(self.as_raw()) };
        if ptr.is_null() {
            return None;
        }
        Some(Blanks::from_raw(
            &self.inner.fc,
            ptr,
            false,
            Some(Arc::clone(&self.inner) as Arc<dyn Any + Send + Sync>),
        ))
    }

    /// Seconds between automatic directory rescans
    /// (`FcConfigGetRescanInterval`).
    pub fn rescan_interval(&self) -> i32 {
        unsafe { (self.api().fc_config_get_rescan_interval)(self.as_raw()) }
    }

    /// Sets the rescan interval; zero disables rescanning
    /// (`FcConfigSetRescanInterval`).
    pub fn set_rescan_interval(&self, seconds: i32) -> Result<()> {
        self.check(
            unsafe { (self.api().fc_config_set_rescan_interval)(self.as_raw(), seconds) },
            "FcConfigSetRescanInterval",
        )
    }

    /// One of the config's font sets (`FcConfigGetFonts`). The set is
    /// a borrowed view owned by the config; patterns enumerated from
    /// it are in turn borrowed from the set.
    pub fn fonts(&self, set: SetName) -> Result<FontSet> {
        let ptr = unsafe { (self.api().fc_config_get_fonts)(self.as_raw(), set.to_raw()) };
        if ptr.is_null() {
            return Err(Error::native("FcConfigGetFonts"));
        }
        Ok(FontSet::from_raw(
            &self.inner.fc,
            ptr,
            false,
            Some(Arc::clone(&self.inner) as Arc<dyn Any + Send + Sync>),
        ))
    }

    /// Adds one font file to the application set
    /// (`FcConfigAppFontAddFile`).
    pub fn app_font_add_file(&self, path: &str) -> Result<()> {
        let c = CString::new(path)?;
        self.check(
            unsafe {
                (self.api().fc_config_app_font_add_file)(
                    self.as_raw(),
                    c.as_ptr() as *const sys::FcChar8,
                )
            },
            "FcConfigAppFontAddFile",
        )
    }

    /// Scans a directory into the application set
    /// (`FcConfigAppFontAddDir`).
    pub fn app_font_add_dir(&self, path: &str) -> Result<()> {
        let c = CString::new(path)?;
        self.check(
            unsafe {
                (self.api().fc_config_app_font_add_dir)(
                    self.as_raw(),
                    c.as_ptr() as *const sys::FcChar8,
                )
            },
            "FcConfigAppFontAddDir",
        )
    }

    /// Empties the application font set (`FcConfigAppFontClear`).
    pub fn app_font_clear(&self) {
        unsafe { (self.api().fc_config_app_font_clear)(self.as_raw()) }
    }

    /// Runs the config's substitution rules over a pattern
    /// (`FcConfigSubstitute`).
    pub fn substitute(&self, pattern: &Pattern, kind: MatchKind) -> Result<()> {
        self.check(
            unsafe {
                (self.api().fc_config_substitute)(self.as_raw(), pattern.as_raw(), kind.to_raw())
            },
            "FcConfigSubstitute",
        )
    }

    /// Runs substitution with a separate reference pattern supplying
    /// `FcMatchFont` values (`FcConfigSubstituteWithPat`).
    pub fn substitute_with_pattern(
        &self,
        pattern: &Pattern,
        reference: &Pattern,
        kind: MatchKind,
    ) -> Result<()> {
        self.check(
            unsafe {
                (self.api().fc_config_substitute_with_pat)(
                    self.as_raw(),
                    pattern.as_raw(),
                    reference.as_raw(),
                    kind.to_raw(),
                )
            },
            "FcConfigSubstituteWithPat",
        )
    }

    /// The system root directory prepended to cache and config paths,
    /// if one is set (`FcConfigGetSysRoot`).
    pub fn sysroot(&self) -> Option<String> {
        let raw = unsafe { (self.api().fc_config_get_sys_root)(self.as_raw()) };
        if raw.is_null() {
            return None;
        }
        let s = unsafe { CStr::from_ptr(raw as *const c_char) };
        Some(s.to_string_lossy().into_owned())
    }

    /// Sets the system root directory (`FcConfigSetSysRoot`).
    pub fn set_sysroot(&self, path: &str) -> Result<()> {
        let c = CString::new(path)?;
        unsafe {
            (self.api().fc_config_set_sys_root)(self.as_raw(), c.as_ptr() as *const sys::FcChar8)
        };
        Ok(())
    }

    pub fn as_raw(&self) -> *mut sys::FcConfig {
        self.inner.handle.get()
    }

    /// Whether two handles refer to the same wrapper object (and so
    /// the same native config).
    pub fn ptr_eq(&self, other: &Config) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn api(&self) -> &sys::FcApi {
        self.inner.fc.api()
    }

    fn check(&self, ok: sys::FcBool, operation: &'static str) -> Result<()> {
        if ok == sys::FcFalse {
            return Err(Error::native(operation));
        }
        Ok(())
    }

    fn str_list(
        &self,
        getter: unsafe extern "C" fn(*mut sys::FcConfig) -> *mut sys::FcStrList,
        operation: &'static str,
    ) -> Result<StrList> {
        let ptr = unsafe { getter(self.as_raw()) };
        if ptr.is_null() {
            return Err(Error::native(operation));
        }
        Ok(StrList::from_raw(
            Arc::clone(&self.inner.fc),
            ptr,
            Some(Arc::clone(&self.inner) as Arc<dyn Any + Send + Sync>),
        ))
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("ptr", &self.as_raw())
            .finish()
    }
}
