//! C type mirrors for the fontconfig public headers.

use std::os::raw::{c_double, c_int};

/// `FcChar8` — fontconfig's byte-string character type.
pub type FcChar8 = u8;
/// `FcChar16` — UTF-16 code unit.
pub type FcChar16 = u16;
/// `FcChar32` — a UCS-4 code point.
pub type FcChar32 = u32;
/// `FcBool` — a C int used as a boolean.
pub type FcBool = c_int;

pub const FcFalse: FcBool = 0;
pub const FcTrue: FcBool = 1;

/// Number of 32-bit words in one character-set page bitmap
/// (256 code points per page).
pub const FC_CHARSET_MAP_SIZE: usize = 8;

/// Sentinel returned by the character-set page cursor when iteration
/// is complete (`(FcChar32) -1` in the headers). It can be reported on
/// either the page-base return value or the next-page out-parameter;
/// both channels must be checked.
pub const FC_CHARSET_DONE: FcChar32 = FcChar32::MAX;

macro_rules! opaque {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(C)]
        pub struct $name {
            _opaque: [u8; 0],
        }
    };
}

opaque!(
    /// An opaque fontconfig configuration (reference counted).
    FcConfig
);
opaque!(
    /// An opaque font pattern (reference counted).
    FcPattern
);
opaque!(
    /// An opaque set of Unicode code points stored as paged bitmaps.
    FcCharSet
);
opaque!(
    /// An opaque set of "blank" code points.
    FcBlanks
);
opaque!(
    /// An opaque unordered set of strings.
    FcStrSet
);
opaque!(
    /// An opaque single-pass cursor over an `FcStrSet`.
    FcStrList
);

/// `FcFontSet` — unlike the other handle types this struct is public
/// in the headers; `fonts` points at an array of `nfont` pattern
/// pointers owned by the set.
#[repr(C)]
pub struct FcFontSet {
    pub nfont: c_int,
    pub sfont: c_int,
    pub fonts: *mut *mut FcPattern,
}

/// `FcMatrix` — a 2x2 transformation matrix for font glyphs.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FcMatrix {
    pub xx: c_double,
    pub xy: c_double,
    pub yx: c_double,
    pub yy: c_double,
}

impl FcMatrix {
    /// The identity matrix (replaces `FcMatrixInit`).
    pub const IDENTITY: FcMatrix = FcMatrix {
        xx: 1.0,
        xy: 0.0,
        yx: 0.0,
        yy: 1.0,
    };
}

impl Default for FcMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `enum FcResult`
pub type FcResult = c_int;
pub const FcResultMatch: FcResult = 0;
pub const FcResultNoMatch: FcResult = 1;
pub const FcResultTypeMismatch: FcResult = 2;
pub const FcResultNoId: FcResult = 3;
pub const FcResultOutOfMemory: FcResult = 4;

/// `enum FcType`
pub type FcType = c_int;
pub const FcTypeUnknown: FcType = -1;
pub const FcTypeVoid: FcType = 0;
pub const FcTypeInteger: FcType = 1;
pub const FcTypeDouble: FcType = 2;
pub const FcTypeString: FcType = 3;
pub const FcTypeBool: FcType = 4;
pub const FcTypeMatrix: FcType = 5;
pub const FcTypeCharSet: FcType = 6;
pub const FcTypeFTFace: FcType = 7;
pub const FcTypeLangSet: FcType = 8;

/// `enum FcMatchKind`
pub type FcMatchKind = c_int;
pub const FcMatchPattern: FcMatchKind = 0;
pub const FcMatchFont: FcMatchKind = 1;
pub const FcMatchScan: FcMatchKind = 2;

/// `enum FcLangResult`
pub type FcLangResult = c_int;
pub const FcLangEqual: FcLangResult = 0;
pub const FcLangDifferentCountry: FcLangResult = 1;
pub const FcLangDifferentTerritory: FcLangResult = 1;
pub const FcLangDifferentLang: FcLangResult = 2;

/// `enum FcSetName` — which font set of a config to address.
pub type FcSetName = c_int;
pub const FcSetSystem: FcSetName = 0;
pub const FcSetApplication: FcSetName = 1;
