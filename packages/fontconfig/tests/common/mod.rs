//! An in-process stand-in for libfontconfig.
//!
//! Implements every entry point of the call table as `extern "C"`
//! functions over boxed Rust objects, with atomic call counters so
//! tests can assert how often native allocation and release actually
//! happened. Injected through `FcLibrary::from_api`, which is exactly
//! the seam a real alternative fontconfig build would use.
//!
//! All state is per-test-binary and guarded by [`setup`]'s lock, since
//! the fake keeps process-global state just like the real library
//! (current config, counters, behavior toggles).

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::ffi::{CStr, CString};
use std::os::raw::c_int;
use std::ptr;
use std::sync::atomic::{AtomicBool, AtomicPtr, AtomicUsize, Ordering};

use fontconfig::sys;
use fontconfig::Fontconfig;
use parking_lot::Mutex;

// ---------------------------------------------------------------------------
// Call counters and behavior toggles
// ---------------------------------------------------------------------------

macro_rules! counters {
    ($($name:ident),+ $(,)?) => {
        pub struct Counters {
            $(pub $name: AtomicUsize,)+
        }

        static COUNTERS: Counters = Counters {
            $($name: AtomicUsize::new(0),)+
        };

        fn reset_counters() {
            $(COUNTERS.$name.store(0, Ordering::SeqCst);)+
        }
    };
}

counters! {
    init,
    fini,
    config_created,
    config_destroy_calls,
    config_freed,
    config_referenced,
    pattern_created,
    pattern_destroy_calls,
    pattern_freed,
    pattern_referenced,
    charset_created,
    charset_destroyed,
    blanks_created,
    blanks_destroyed,
    fontset_created,
    fontset_destroyed,
    strset_created,
    strset_destroyed,
    strlist_created,
    strlist_done,
    str_freed,
}

pub fn counters() -> &'static Counters {
    &COUNTERS
}

/// Read helper so tests don't repeat the ordering everywhere.
pub fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

/// When set, the charset page cursor never reports completion through
/// the next-page out-parameter; termination is only visible as a
/// `FC_CHARSET_DONE` page base on the following call. Used to exercise
/// the decoder's base-channel termination check.
static CURSOR_NEVER_DONE: AtomicBool = AtomicBool::new(false);

pub fn set_cursor_never_done(enabled: bool) {
    CURSOR_NEVER_DONE.store(enabled, Ordering::SeqCst);
}

/// When set, `FcFontSetAdd` rejects the pattern.
static FONTSET_ADD_FAILS: AtomicBool = AtomicBool::new(false);

pub fn set_fontset_add_fails(enabled: bool) {
    FONTSET_ADD_FAILS.store(enabled, Ordering::SeqCst);
}

static CURRENT_CONFIG: AtomicPtr<sys::FcConfig> = AtomicPtr::new(ptr::null_mut());

// ---------------------------------------------------------------------------
// Fake native objects
// ---------------------------------------------------------------------------

struct FakePattern {
    refs: i32,
}

struct FakeBlanks {
    chars: BTreeSet<u32>,
}

struct FakeCharSet {
    chars: BTreeSet<u32>,
}

struct FakeStrSet {
    items: Vec<CString>,
}

struct FakeStrList {
    items: Vec<CString>,
    index: usize,
}

/// Header-first so a pointer to the box doubles as `*mut FcFontSet`,
/// matching the real library's public struct layout.
#[repr(C)]
struct FakeFontSet {
    hdr: sys::FcFontSet,
    pats: Vec<*mut sys::FcPattern>,
}

struct FakeConfig {
    refs: i32,
    rescan: c_int,
    built: bool,
    sysroot: Option<CString>,
    font_dirs: Vec<CString>,
    config_dirs: Vec<CString>,
    cache_dirs: Vec<CString>,
    config_files: Vec<CString>,
    blanks: *mut sys::FcBlanks,
    system_fonts: *mut sys::FcFontSet,
    app_fonts: *mut sys::FcFontSet,
}

fn cstrings(items: &[&str]) -> Vec<CString> {
    items.iter().map(|s| CString::new(*s).unwrap()).collect()
}

unsafe fn config<'a>(p: *mut sys::FcConfig) -> &'a mut FakeConfig {
    unsafe { &mut *(p as *mut FakeConfig) }
}

unsafe fn pattern<'a>(p: *mut sys::FcPattern) -> &'a mut FakePattern {
    unsafe { &mut *(p as *mut FakePattern) }
}

unsafe fn blanks<'a>(p: *mut sys::FcBlanks) -> &'a mut FakeBlanks {
    unsafe { &mut *(p as *mut FakeBlanks) }
}

unsafe fn charset<'a>(p: *const sys::FcCharSet) -> &'a mut FakeCharSet {
    unsafe { &mut *(p as *mut FakeCharSet) }
}

unsafe fn strset<'a>(p: *mut sys::FcStrSet) -> &'a mut FakeStrSet {
    unsafe { &mut *(p as *mut FakeStrSet) }
}

unsafe fn strlist<'a>(p: *mut sys::FcStrList) -> &'a mut FakeStrList {
    unsafe { &mut *(p as *mut FakeStrList) }
}

unsafe fn fontset<'a>(p: *mut sys::FcFontSet) -> &'a mut FakeFontSet {
    unsafe { &mut *(p as *mut FakeFontSet) }
}

fn sync_fontset(set: &mut FakeFontSet) {
    set.hdr.nfont = set.pats.len() as c_int;
    set.hdr.sfont = set.pats.capacity() as c_int;
    set.hdr.fonts = set.pats.as_mut_ptr();
}

fn alloc_pattern() -> *mut sys::FcPattern {
    COUNTERS.pattern_created.fetch_add(1, Ordering::SeqCst);
    Box::into_raw(Box::new(FakePattern { refs: 1 })) as *mut sys::FcPattern
}

fn alloc_fontset() -> *mut sys::FcFontSet {
    COUNTERS.fontset_created.fetch_add(1, Ordering::SeqCst);
    let mut set = Box::new(FakeFontSet {
        hdr: sys::FcFontSet {
            nfont: 0,
            sfont: 0,
            fonts: ptr::null_mut(),
        },
        pats: Vec::new(),
    });
    sync_fontset(&mut set);
    Box::into_raw(set) as *mut sys::FcFontSet
}

unsafe fn release_pattern(p: *mut sys::FcPattern) {
    COUNTERS.pattern_destroy_calls.fetch_add(1, Ordering::SeqCst);
    let pat = unsafe { pattern(p) };
    pat.refs -= 1;
    if pat.refs == 0 {
        COUNTERS.pattern_freed.fetch_add(1, Ordering::SeqCst);
        drop(unsafe { Box::from_raw(p as *mut FakePattern) });
    }
}

unsafe fn release_fontset(p: *mut sys::FcFontSet) {
    COUNTERS.fontset_destroyed.fetch_add(1, Ordering::SeqCst);
    let set = unsafe { Box::from_raw(p as *mut FakeFontSet) };
    for pat in &set.pats {
        unsafe { release_pattern(*pat) };
    }
}

// ---------------------------------------------------------------------------
// Entry points: init
// ---------------------------------------------------------------------------

unsafe extern "C" fn fc_init() -> sys::FcBool {
    COUNTERS.init.fetch_add(1, Ordering::SeqCst);
    sys::FcTrue
}

unsafe extern "C" fn fc_fini() {
    COUNTERS.fini.fetch_add(1, Ordering::SeqCst);
}

unsafe extern "C" fn fc_get_version() -> c_int {
    21300
}

unsafe extern "C" fn fc_init_reinitialize() -> sys::FcBool {
    sys::FcTrue
}

unsafe extern "C" fn fc_init_bring_upto_date() -> sys::FcBool {
    sys::FcTrue
}

// ---------------------------------------------------------------------------
// Entry points: blanks
// ---------------------------------------------------------------------------

unsafe extern "C" fn fc_blanks_create() -> *mut sys::FcBlanks {
    COUNTERS.blanks_created.fetch_add(1, Ordering::SeqCst);
    Box::into_raw(Box::new(FakeBlanks {
        chars: BTreeSet::new(),
    })) as *mut sys::FcBlanks
}

unsafe extern "C" fn fc_blanks_destroy(p: *mut sys::FcBlanks) {
    COUNTERS.blanks_destroyed.fetch_add(1, Ordering::SeqCst);
    drop(unsafe { Box::from_raw(p as *mut FakeBlanks) });
}

unsafe extern "C" fn fc_blanks_add(p: *mut sys::FcBlanks, ch: sys::FcChar32) -> sys::FcBool {
    unsafe { blanks(p) }.chars.insert(ch);
    sys::FcTrue
}

unsafe extern "C" fn fc_blanks_is_member(p: *mut sys::FcBlanks, ch: sys::FcChar32) -> sys::FcBool {
    if unsafe { blanks(p) }.chars.contains(&ch) {
        sys::FcTrue
    } else {
        sys::FcFalse
    }
}

// ---------------------------------------------------------------------------
// Entry points: config
// ---------------------------------------------------------------------------

unsafe extern "C" fn fc_config_create() -> *mut sys::FcConfig {
    COUNTERS.config_created.fetch_add(1, Ordering::SeqCst);
    let cfg = FakeConfig {
        refs: 1,
        rescan: 30,
        built: false,
        sysroot: None,
        font_dirs: cstrings(&["/usr/share/fonts", "/usr/local/share/fonts"]),
        config_dirs: cstrings(&["/etc/fonts/conf.d"]),
        cache_dirs: cstrings(&["/var/cache/fontconfig"]),
        config_files: cstrings(&["/etc/fonts/fonts.conf"]),
        blanks: unsafe { fc_blanks_create() },
        system_fonts: alloc_fontset(),
        app_fonts: alloc_fontset(),
    };
    Box::into_raw(Box::new(cfg)) as *mut sys::FcConfig
}

unsafe extern "C" fn fc_config_reference(p: *mut sys::FcConfig) -> *mut sys::FcConfig {
    COUNTERS.config_referenced.fetch_add(1, Ordering::SeqCst);
    unsafe { config(p) }.refs += 1;
    p
}

unsafe extern "C" fn fc_config_destroy(p: *mut sys::FcConfig) {
    COUNTERS.config_destroy_calls.fetch_add(1, Ordering::SeqCst);
    let cfg = unsafe { config(p) };
    cfg.refs -= 1;
    if cfg.refs == 0 {
        COUNTERS.config_freed.fetch_add(1, Ordering::SeqCst);
        let cfg = unsafe { Box::from_raw(p as *mut FakeConfig) };
        unsafe {
            fc_blanks_destroy(cfg.blanks);
            release_fontset(cfg.system_fonts);
            release_fontset(cfg.app_fonts);
        }
    }
}

unsafe extern "C" fn fc_config_get_current() -> *mut sys::FcConfig {
    let current = CURRENT_CONFIG.load(Ordering::SeqCst);
    if !current.is_null() {
        return current;
    }
    // First access allocates the default config, like FcInitLoadConfig.
    let fresh = unsafe { fc_config_create() };
    CURRENT_CONFIG.store(fresh, Ordering::SeqCst);
    fresh
}

unsafe extern "C" fn fc_config_set_current(p: *mut sys::FcConfig) -> sys::FcBool {
    let previous = CURRENT_CONFIG.swap(p, Ordering::SeqCst);
    unsafe { fc_config_reference(p) };
    if !previous.is_null() && previous != p {
        unsafe { fc_config_destroy(previous) };
    }
    sys::FcTrue
}

unsafe extern "C" fn fc_config_upto_date(p: *mut sys::FcConfig) -> sys::FcBool {
    if unsafe { config(p) }.built {
        sys::FcTrue
    } else {
        sys::FcFalse
    }
}

unsafe extern "C" fn fc_config_build_fonts(p: *mut sys::FcConfig) -> sys::FcBool {
    let cfg = unsafe { config(p) };
    cfg.built = true;
    let set = unsafe { fontset(cfg.system_fonts) };
    for pat in set.pats.drain(..) {
        unsafe { release_pattern(pat) };
    }
    // A small but non-empty system set.
    for _ in 0..3 {
        set.pats.push(alloc_pattern());
    }
    sync_fontset(set);
    sys::FcTrue
}

unsafe fn make_strlist(items: &[CString]) -> *mut sys::FcStrList {
    COUNTERS.strlist_created.fetch_add(1, Ordering::SeqCst);
    Box::into_raw(Box::new(FakeStrList {
        items: items.to_vec(),
        index: 0,
    })) as *mut sys::FcStrList
}

unsafe extern "C" fn fc_config_get_font_dirs(p: *mut sys::FcConfig) -> *mut sys::FcStrList {
    unsafe { make_strlist(&config(p).font_dirs) }
}

unsafe extern "C" fn fc_config_get_config_dirs(p: *mut sys::FcConfig) -> *mut sys::FcStrList {
    unsafe { make_strlist(&config(p).config_dirs) }
}

unsafe extern "C" fn fc_config_get_cache_dirs(p: *mut sys::FcConfig) -> *mut sys::FcStrList {
    unsafe { make_strlist(&config(p).cache_dirs) }
}

unsafe extern "C" fn fc_config_get_config_files(p: *mut sys::FcConfig) -> *mut sys::FcStrList {
    unsafe { make_strlist(&config(p).config_files) }
}

unsafe extern "C" fn fc_config_get_blanks(p: *mut sys::FcConfig) -> *mut sys::FcBlanks {
    unsafe { config(p) }.blanks
}

unsafe extern "C" fn fc_config_get_rescan_interval(p: *mut sys::FcConfig) -> c_int {
    unsafe { config(p) }.rescan
}

unsafe extern "C" fn fc_config_set_rescan_interval(
    p: *mut sys::FcConfig,
    seconds: c_int,
) -> sys::FcBool {
    if seconds < 0 {
        return sys::FcFalse;
    }
    unsafe { config(p) }.rescan = seconds;
    sys::FcTrue
}

unsafe extern "C" fn fc_config_get_fonts(
    p: *mut sys::FcConfig,
    set: sys::FcSetName,
) -> *mut sys::FcFontSet {
    let cfg = unsafe { config(p) };
    match set {
        sys::FcSetSystem => cfg.system_fonts,
        sys::FcSetApplication => cfg.app_fonts,
        _ => ptr::null_mut(),
    }
}

unsafe extern "C" fn fc_config_app_font_add_file(
    p: *mut sys::FcConfig,
    file: *const sys::FcChar8,
) -> sys::FcBool {
    let name = unsafe { CStr::from_ptr(file as *const _) };
    if name.to_bytes().starts_with(b"/nonexistent") {
        return sys::FcFalse;
    }
    let cfg = unsafe { config(p) };
    let set = unsafe { fontset(cfg.app_fonts) };
    set.pats.push(alloc_pattern());
    sync_fontset(set);
    sys::FcTrue
}

unsafe extern "C" fn fc_config_app_font_add_dir(
    p: *mut sys::FcConfig,
    dir: *const sys::FcChar8,
) -> sys::FcBool {
    let name = unsafe { CStr::from_ptr(dir as *const _) };
    if name.to_bytes().starts_with(b"/nonexistent") {
        return sys::FcFalse;
    }
    let cfg = unsafe { config(p) };
    let set = unsafe { fontset(cfg.app_fonts) };
    // Pretend every directory holds two fonts.
    set.pats.push(alloc_pattern());
    set.pats.push(alloc_pattern());
    sync_fontset(set);
    sys::FcTrue
}

unsafe extern "C" fn fc_config_app_font_clear(p: *mut sys::FcConfig) {
    let cfg = unsafe { config(p) };
    let set = unsafe { fontset(cfg.app_fonts) };
    for pat in set.pats.drain(..) {
        unsafe { release_pattern(pat) };
    }
    sync_fontset(set);
}

unsafe extern "C" fn fc_config_substitute(
    _p: *mut sys::FcConfig,
    pat: *mut sys::FcPattern,
    _kind: sys::FcMatchKind,
) -> sys::FcBool {
    if pat.is_null() {
        sys::FcFalse
    } else {
        sys::FcTrue
    }
}

unsafe extern "C" fn fc_config_substitute_with_pat(
    _p: *mut sys::FcConfig,
    pat: *mut sys::FcPattern,
    _reference: *mut sys::FcPattern,
    _kind: sys::FcMatchKind,
) -> sys::FcBool {
    if pat.is_null() {
        sys::FcFalse
    } else {
        sys::FcTrue
    }
}

unsafe extern "C" fn fc_config_get_sys_root(p: *const sys::FcConfig) -> *const sys::FcChar8 {
    match &unsafe { config(p as *mut _) }.sysroot {
        Some(root) => root.as_ptr() as *const sys::FcChar8,
        None => ptr::null(),
    }
}

unsafe extern "C" fn fc_config_set_sys_root(p: *mut sys::FcConfig, root: *const sys::FcChar8) {
    let root = unsafe { CStr::from_ptr(root as *const _) };
    unsafe { config(p) }.sysroot = Some(root.to_owned());
}

// ---------------------------------------------------------------------------
// Entry points: charset
// ---------------------------------------------------------------------------

unsafe extern "C" fn fc_char_set_create() -> *mut sys::FcCharSet {
    COUNTERS.charset_created.fetch_add(1, Ordering::SeqCst);
    Box::into_raw(Box::new(FakeCharSet {
        chars: BTreeSet::new(),
    })) as *mut sys::FcCharSet
}

unsafe extern "C" fn fc_char_set_destroy(p: *mut sys::FcCharSet) {
    COUNTERS.charset_destroyed.fetch_add(1, Ordering::SeqCst);
    drop(unsafe { Box::from_raw(p as *mut FakeCharSet) });
}

unsafe extern "C" fn fc_char_set_add_char(
    p: *mut sys::FcCharSet,
    ch: sys::FcChar32,
) -> sys::FcBool {
    if ch > 0x10ffff {
        return sys::FcFalse;
    }
    unsafe { charset(p) }.chars.insert(ch);
    sys::FcTrue
}

unsafe extern "C" fn fc_char_set_count(p: *const sys::FcCharSet) -> sys::FcChar32 {
    unsafe { charset(p) }.chars.len() as sys::FcChar32
}

/// Shared by first-page/next-page: `page` is the index into the sorted
/// list of occupied 256-codepoint pages; the cursor out-parameter
/// carries the next index.
unsafe fn fill_page(
    p: *const sys::FcCharSet,
    page: sys::FcChar32,
    map: *mut sys::FcChar32,
    next: *mut sys::FcChar32,
) -> sys::FcChar32 {
    let set = unsafe { charset(p) };
    let bases: Vec<u32> = {
        let mut bases: Vec<u32> = set.chars.iter().map(|c| c & !0xff).collect();
        bases.dedup();
        bases
    };
    let index = page as usize;
    if index >= bases.len() {
        // Termination on the page-base channel.
        return sys::FC_CHARSET_DONE;
    }
    let base = bases[index];
    let words = unsafe { std::slice::from_raw_parts_mut(map, sys::FC_CHARSET_MAP_SIZE) };
    words.fill(0);
    for ch in set.chars.range(base..base + 256) {
        let offset = ch - base;
        words[(offset / 32) as usize] |= 1 << (offset % 32);
    }
    let more = index + 1 < bases.len();
    unsafe {
        *next = if more || CURSOR_NEVER_DONE.load(Ordering::SeqCst) {
            (index + 1) as sys::FcChar32
        } else {
            // Termination on the cursor channel.
            sys::FC_CHARSET_DONE
        };
    }
    base
}

unsafe extern "C" fn fc_char_set_first_page(
    p: *const sys::FcCharSet,
    map: *mut sys::FcChar32,
    next: *mut sys::FcChar32,
) -> sys::FcChar32 {
    unsafe { fill_page(p, 0, map, next) }
}

unsafe extern "C" fn fc_char_set_next_page(
    p: *const sys::FcCharSet,
    map: *mut sys::FcChar32,
    next: *mut sys::FcChar32,
) -> sys::FcChar32 {
    let page = unsafe { *next };
    unsafe { fill_page(p, page, map, next) }
}

// ---------------------------------------------------------------------------
// Entry points: fontset
// ---------------------------------------------------------------------------

unsafe extern "C" fn fc_font_set_create() -> *mut sys::FcFontSet {
    alloc_fontset()
}

unsafe extern "C" fn fc_font_set_destroy(p: *mut sys::FcFontSet) {
    unsafe { release_fontset(p) }
}

unsafe extern "C" fn fc_font_set_add(
    p: *mut sys::FcFontSet,
    pat: *mut sys::FcPattern,
) -> sys::FcBool {
    if FONTSET_ADD_FAILS.load(Ordering::SeqCst) {
        return sys::FcFalse;
    }
    let set = unsafe { fontset(p) };
    set.pats.push(pat);
    sync_fontset(set);
    sys::FcTrue
}

// ---------------------------------------------------------------------------
// Entry points: pattern
// ---------------------------------------------------------------------------

unsafe extern "C" fn fc_pattern_create() -> *mut sys::FcPattern {
    alloc_pattern()
}

unsafe extern "C" fn fc_pattern_duplicate(p: *const sys::FcPattern) -> *mut sys::FcPattern {
    let _ = unsafe { pattern(p as *mut _) };
    alloc_pattern()
}

unsafe extern "C" fn fc_pattern_reference(p: *mut sys::FcPattern) {
    COUNTERS.pattern_referenced.fetch_add(1, Ordering::SeqCst);
    unsafe { pattern(p) }.refs += 1;
}

unsafe extern "C" fn fc_pattern_destroy(p: *mut sys::FcPattern) {
    unsafe { release_pattern(p) }
}

// ---------------------------------------------------------------------------
// Entry points: strings
// ---------------------------------------------------------------------------

unsafe extern "C" fn fc_str_copy_filename(name: *const sys::FcChar8) -> *mut sys::FcChar8 {
    let name = unsafe { CStr::from_ptr(name as *const _) };
    let bytes = name.to_bytes();
    let expanded = if let Some(rest) = bytes.strip_prefix(b"~") {
        let mut buf = b"/home/tester".to_vec();
        buf.extend_from_slice(rest);
        buf
    } else {
        bytes.to_vec()
    };
    match CString::new(expanded) {
        Ok(s) => s.into_raw() as *mut sys::FcChar8,
        Err(_) => ptr::null_mut(),
    }
}

unsafe extern "C" fn fc_str_free(s: *mut sys::FcChar8) {
    COUNTERS.str_freed.fetch_add(1, Ordering::SeqCst);
    drop(unsafe { CString::from_raw(s as *mut _) });
}

unsafe extern "C" fn fc_str_set_create() -> *mut sys::FcStrSet {
    COUNTERS.strset_created.fetch_add(1, Ordering::SeqCst);
    Box::into_raw(Box::new(FakeStrSet { items: Vec::new() })) as *mut sys::FcStrSet
}

unsafe extern "C" fn fc_str_set_add(p: *mut sys::FcStrSet, s: *const sys::FcChar8) -> sys::FcBool {
    let s = unsafe { CStr::from_ptr(s as *const _) };
    unsafe { strset(p) }.items.push(s.to_owned());
    sys::FcTrue
}

unsafe extern "C" fn fc_str_set_destroy(p: *mut sys::FcStrSet) {
    COUNTERS.strset_destroyed.fetch_add(1, Ordering::SeqCst);
    drop(unsafe { Box::from_raw(p as *mut FakeStrSet) });
}

unsafe extern "C" fn fc_str_list_create(p: *mut sys::FcStrSet) -> *mut sys::FcStrList {
    unsafe { make_strlist(&strset(p).items) }
}

unsafe extern "C" fn fc_str_list_first(p: *mut sys::FcStrList) {
    unsafe { strlist(p) }.index = 0;
}

unsafe extern "C" fn fc_str_list_next(p: *mut sys::FcStrList) -> *mut sys::FcChar8 {
    let list = unsafe { strlist(p) };
    match list.items.get(list.index) {
        Some(s) => {
            list.index += 1;
            s.as_ptr() as *mut sys::FcChar8
        }
        None => ptr::null_mut(),
    }
}

unsafe extern "C" fn fc_str_list_done(p: *mut sys::FcStrList) {
    COUNTERS.strlist_done.fetch_add(1, Ordering::SeqCst);
    drop(unsafe { Box::from_raw(p as *mut FakeStrList) });
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

/// The complete call table over the fake implementation.
pub fn api() -> sys::FcApi {
    sys::FcApi {
        fc_init,
        fc_fini,
        fc_get_version,
        fc_init_reinitialize,
        fc_init_bring_upto_date,
        fc_blanks_create,
        fc_blanks_destroy,
        fc_blanks_add,
        fc_blanks_is_member,
        fc_config_create,
        fc_config_reference,
        fc_config_destroy,
        fc_config_get_current,
        fc_config_set_current,
        fc_config_upto_date,
        fc_config_build_fonts,
        fc_config_get_font_dirs,
        fc_config_get_config_dirs,
        fc_config_get_cache_dirs,
        fc_config_get_config_files,
        fc_config_get_blanks,
        fc_config_get_rescan_interval,
        fc_config_set_rescan_interval,
        fc_config_get_fonts,
        fc_config_app_font_add_file,
        fc_config_app_font_add_dir,
        fc_config_app_font_clear,
        fc_config_substitute,
        fc_config_substitute_with_pat,
        fc_config_get_sys_root,
        fc_config_set_sys_root,
        fc_char_set_create,
        fc_char_set_destroy,
        fc_char_set_add_char,
        fc_char_set_count,
        fc_char_set_first_page,
        fc_char_set_next_page,
        fc_font_set_create,
        fc_font_set_destroy,
        fc_font_set_add,
        fc_pattern_create,
        fc_pattern_duplicate,
        fc_pattern_reference,
        fc_pattern_destroy,
        fc_str_copy_filename,
        fc_str_free,
        fc_str_set_create,
        fc_str_set_add,
        fc_str_set_destroy,
        fc_str_list_create,
        fc_str_list_first,
        fc_str_list_next,
        fc_str_list_done,
    }
}

/// Serializes tests within one binary and hands out a fresh library
/// over freshly zeroed fake state.
pub struct TestGuard {
    _lock: parking_lot::MutexGuard<'static, ()>,
    pub fc: Fontconfig,
}

pub fn setup() -> TestGuard {
    static LOCK: Mutex<()> = Mutex::new(());
    let lock = LOCK.lock();
    let _ = env_logger::builder().is_test(true).try_init();

    // Clear state left over from the previous test in this binary.
    let previous = CURRENT_CONFIG.swap(ptr::null_mut(), Ordering::SeqCst);
    if !previous.is_null() {
        unsafe { fc_config_destroy(previous) };
    }
    set_cursor_never_done(false);
    set_fontset_add_fails(false);
    reset_counters();

    let fc = Fontconfig::open_with(sys::FcLibrary::from_api(api())).expect("fake library opens");
    TestGuard { _lock: lock, fc }
}
