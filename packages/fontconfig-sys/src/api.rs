//! The foreign call table.
//!
//! fontconfig entry points are resolved once, at library-open time,
//! into [`FcApi`]: a plain struct of typed `unsafe extern "C"`
//! function pointers. The field types are the compile-time-checked
//! record of each function's signature; there is no runtime reflection
//! and no per-call symbol lookup.
//!
//! [`FcLibrary`] pairs the table with the `libloading::Library` that
//! keeps the symbols valid. Dropping the `FcLibrary` is the unload
//! boundary: no pointer taken from its table may be called afterwards.

use std::os::raw::c_int;

use crate::types::*;

macro_rules! fc_api {
    ($(
        $(#[$meta:meta])*
        $field:ident: fn($($arg:ty),*) $(-> $ret:ty)? = $sym:literal;
    )+) => {
        /// Typed function-pointer table covering the fontconfig entry
        /// points used by the binding, one field per C function.
        #[derive(Clone, Copy)]
        pub struct FcApi {
            $(
                $(#[$meta])*
                pub $field: unsafe extern "C" fn($($arg),*) $(-> $ret)?,
            )+
        }

        impl FcApi {
            /// Resolves every entry point from an already-opened
            /// library. Fails on the first missing symbol.
            ///
            /// # Safety
            ///
            /// The returned pointers are only valid while `lib` stays
            /// loaded, and each symbol must actually have the declared
            /// signature.
            pub unsafe fn load(lib: &libloading::Library) -> Result<Self, libloading::Error> {
                Ok(Self {
                    $(
                        $field: *unsafe {
                            lib.get::<unsafe extern "C" fn($($arg),*) $(-> $ret)?>($sym)
                        }?,
                    )+
                })
            }
        }
    };
}

fc_api! {
    // Library initialization. FcBool results use FcFalse as the
    // failure sentinel.
    fc_init: fn() -> FcBool = b"FcInit";
    fc_fini: fn() = b"FcFini";
    fc_get_version: fn() -> c_int = b"FcGetVersion";
    fc_init_reinitialize: fn() -> FcBool = b"FcInitReinitialize";
    fc_init_bring_upto_date: fn() -> FcBool = b"FcInitBringUptoDate";

    // Blanks. Create returns null on allocation failure.
    fc_blanks_create: fn() -> *mut FcBlanks = b"FcBlanksCreate";
    fc_blanks_destroy: fn(*mut FcBlanks) = b"FcBlanksDestroy";
    fc_blanks_add: fn(*mut FcBlanks, FcChar32) -> FcBool = b"FcBlanksAdd";
    fc_blanks_is_member: fn(*mut FcBlanks, FcChar32) -> FcBool = b"FcBlanksIsMember";

    // Config. Reference returns its argument with the count bumped;
    // destroy decrements and frees on zero. Get-current and the
    // str-list/font-set/blanks getters return borrowed pointers (or
    // null for absence).
    fc_config_create: fn() -> *mut FcConfig = b"FcConfigCreate";
    fc_config_reference: fn(*mut FcConfig) -> *mut FcConfig = b"FcConfigReference";
    fc_config_destroy: fn(*mut FcConfig) = b"FcConfigDestroy";
    fc_config_get_current: fn() -> *mut FcConfig = b"FcConfigGetCurrent";
    fc_config_set_current: fn(*mut FcConfig) -> FcBool = b"FcConfigSetCurrent";
    fc_config_upto_date: fn(*mut FcConfig) -> FcBool = b"FcConfigUptoDate";
    fc_config_build_fonts: fn(*mut FcConfig) -> FcBool = b"FcConfigBuildFonts";
    fc_config_get_font_dirs: fn(*mut FcConfig) -> *mut FcStrList = b"FcConfigGetFontDirs";
    fc_config_get_config_dirs: fn(*mut FcConfig) -> *mut FcStrList = b"FcConfigGetConfigDirs";
    fc_config_get_cache_dirs: fn(*mut FcConfig) -> *mut FcStrList = b"FcConfigGetCacheDirs";
    fc_config_get_config_files: fn(*mut FcConfig) -> *mut FcStrList = b"FcConfigGetConfigFiles";
    fc_config_get_blanks: fn(*mut FcConfig) -> *mut FcBlanks = b"FcConfigGetBlanks";
    fc_config_get_rescan_interval: fn(*mut FcConfig) -> c_int = b"FcConfigGetRescanInterval";
    fc_config_set_rescan_interval: fn(*mut FcConfig, c_int) -> FcBool = b"FcConfigSetRescanInterval";
    fc_config_get_fonts: fn(*mut FcConfig, FcSetName) -> *mut FcFontSet = b"FcConfigGetFonts";
    fc_config_app_font_add_file: fn(*mut FcConfig, *const FcChar8) -> FcBool = b"FcConfigAppFontAddFile";
    fc_config_app_font_add_dir: fn(*mut FcConfig, *const FcChar8) -> FcBool = b"FcConfigAppFontAddDir";
    fc_config_app_font_clear: fn(*mut FcConfig) = b"FcConfigAppFontClear";
    fc_config_substitute: fn(*mut FcConfig, *mut FcPattern, FcMatchKind) -> FcBool = b"FcConfigSubstitute";
    fc_config_substitute_with_pat: fn(*mut FcConfig, *mut FcPattern, *mut FcPattern, FcMatchKind) -> FcBool = b"FcConfigSubstituteWithPat";
    fc_config_get_sys_root: fn(*const FcConfig) -> *const FcChar8 = b"FcConfigGetSysRoot";
    fc_config_set_sys_root: fn(*mut FcConfig, *const FcChar8) = b"FcConfigSetSysRoot";

    // Character sets. The page cursor reports completion through
    // FC_CHARSET_DONE on either channel (see crate docs).
    fc_char_set_create: fn() -> *mut FcCharSet = b"FcCharSetCreate";
    fc_char_set_destroy: fn(*mut FcCharSet) = b"FcCharSetDestroy";
    fc_char_set_add_char: fn(*mut FcCharSet, FcChar32) -> FcBool = b"FcCharSetAddChar";
    fc_char_set_count: fn(*const FcCharSet) -> FcChar32 = b"FcCharSetCount";
    fc_char_set_first_page: fn(*const FcCharSet, *mut FcChar32, *mut FcChar32) -> FcChar32 = b"FcCharSetFirstPage";
    fc_char_set_next_page: fn(*const FcCharSet, *mut FcChar32, *mut FcChar32) -> FcChar32 = b"FcCharSetNextPage";

    // Font sets. FcFontSetAdd adopts the caller's pattern reference.
    fc_font_set_create: fn() -> *mut FcFontSet = b"FcFontSetCreate";
    fc_font_set_destroy: fn(*mut FcFontSet) = b"FcFontSetDestroy";
    fc_font_set_add: fn(*mut FcFontSet, *mut FcPattern) -> FcBool = b"FcFontSetAdd";

    // Patterns (reference counted).
    fc_pattern_create: fn() -> *mut FcPattern = b"FcPatternCreate";
    fc_pattern_duplicate: fn(*const FcPattern) -> *mut FcPattern = b"FcPatternDuplicate";
    fc_pattern_reference: fn(*mut FcPattern) = b"FcPatternReference";
    fc_pattern_destroy: fn(*mut FcPattern) = b"FcPatternDestroy";

    // Strings. FcStrCopyFilename returns a fresh allocation the
    // caller releases with FcStrFree; strings yielded by
    // FcStrListNext stay owned by the list.
    fc_str_copy_filename: fn(*const FcChar8) -> *mut FcChar8 = b"FcStrCopyFilename";
    fc_str_free: fn(*mut FcChar8) = b"FcStrFree";
    fc_str_set_create: fn() -> *mut FcStrSet = b"FcStrSetCreate";
    fc_str_set_add: fn(*mut FcStrSet, *const FcChar8) -> FcBool = b"FcStrSetAdd";
    fc_str_set_destroy: fn(*mut FcStrSet) = b"FcStrSetDestroy";
    fc_str_list_create: fn(*mut FcStrSet) -> *mut FcStrList = b"FcStrListCreate";
    fc_str_list_first: fn(*mut FcStrList) = b"FcStrListFirst";
    fc_str_list_next: fn(*mut FcStrList) -> *mut FcChar8 = b"FcStrListNext";
    fc_str_list_done: fn(*mut FcStrList) = b"FcStrListDone";
}

/// An opened fontconfig library: the call table plus whatever keeps
/// its symbols alive.
///
/// Dropping an `FcLibrary` built by [`FcLibrary::open`] unloads the
/// shared object; every pointer previously copied out of its table
/// becomes invalid at that point.
pub struct FcLibrary {
    api: FcApi,
    _lib: Option<libloading::Library>,
}

impl FcLibrary {
    /// Platform soname for fontconfig.
    #[cfg(target_os = "linux")]
    pub const SONAME: &'static str = "libfontconfig.so.1";
    #[cfg(target_os = "macos")]
    pub const SONAME: &'static str = "libfontconfig.1.dylib";
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    pub const SONAME: &'static str = "fontconfig";

    /// Opens the system fontconfig and binds the call table.
    pub fn open() -> Result<Self, libloading::Error> {
        Self::open_path(Self::SONAME)
    }

    /// Opens a fontconfig shared object at an explicit path.
    pub fn open_path(path: &str) -> Result<Self, libloading::Error> {
        let lib = unsafe { libloading::Library::new(path) }?;
        let api = unsafe { FcApi::load(&lib) }?;
        log::debug!("loaded fontconfig from {path}");
        Ok(Self {
            api,
            _lib: Some(lib),
        })
    }

    /// Wraps a caller-supplied call table. Used to substitute an
    /// alternative implementation of the fontconfig entry points, for
    /// example an in-process test double.
    ///
    /// The caller is responsible for keeping the code behind the
    /// table's pointers loaded for the lifetime of the value.
    pub fn from_api(api: FcApi) -> Self {
        Self { api, _lib: None }
    }

    /// The bound call table.
    pub fn api(&self) -> &FcApi {
        &self.api
    }
}
