//! Constant table mirroring `fontconfig/fontconfig.h`.
//!
//! Property names are the string keys used by pattern elements; the
//! numeric constants are the conventional values for those elements.
//! This table is reproduced from the published headers and is a fixed
//! external contract, not something this crate defines.

use std::os::raw::c_int;

/// Fontconfig version the constant table was taken from.
pub const FC_MAJOR: c_int = 2;
pub const FC_MINOR: c_int = 11;
pub const FC_REVISION: c_int = 0;
pub const FC_VERSION: c_int = FC_MAJOR * 10000 + FC_MINOR * 100 + FC_REVISION;

/// Current font cache file format version.
pub const FC_CACHE_VERSION: &str = "4";
pub const FC_CACHE_SUFFIX: &str = ".cache-4";
pub const FC_DIR_CACHE_FILE: &str = "fonts.cache-4";
pub const FC_USER_CACHE_FILE: &str = ".fonts.cache-4";

// Pattern element names. The comment gives the element's value type.
pub const FC_FAMILY: &str = "family"; // String
pub const FC_STYLE: &str = "style"; // String
pub const FC_SLANT: &str = "slant"; // Int
pub const FC_WEIGHT: &str = "weight"; // Int
pub const FC_SIZE: &str = "size"; // Double
pub const FC_ASPECT: &str = "aspect"; // Double
pub const FC_PIXEL_SIZE: &str = "pixelsize"; // Double
pub const FC_SPACING: &str = "spacing"; // Int
pub const FC_FOUNDRY: &str = "foundry"; // String
pub const FC_ANTIALIAS: &str = "antialias"; // Bool
pub const FC_HINTING: &str = "hinting"; // Bool
pub const FC_HINT_STYLE: &str = "hintstyle"; // Int
pub const FC_VERTICAL_LAYOUT: &str = "verticallayout"; // Bool
pub const FC_AUTOHINT: &str = "autohint"; // Bool
// Deprecated; ignored by freetype 2.4.5 and later.
pub const FC_GLOBAL_ADVANCE: &str = "globaladvance"; // Bool
pub const FC_WIDTH: &str = "width"; // Int
pub const FC_FILE: &str = "file"; // String
pub const FC_INDEX: &str = "index"; // Int
pub const FC_FT_FACE: &str = "ftface"; // FT_Face
pub const FC_RASTERIZER: &str = "rasterizer"; // String (deprecated)
pub const FC_OUTLINE: &str = "outline"; // Bool
pub const FC_SCALABLE: &str = "scalable"; // Bool
pub const FC_SCALE: &str = "scale"; // Double
pub const FC_DPI: &str = "dpi"; // Double
pub const FC_RGBA: &str = "rgba"; // Int
pub const FC_MINSPACE: &str = "minspace"; // Bool
pub const FC_SOURCE: &str = "source"; // String (deprecated)
pub const FC_CHARSET: &str = "charset"; // CharSet
pub const FC_LANG: &str = "lang"; // String (RFC 3066)
pub const FC_FONTVERSION: &str = "fontversion"; // Int
pub const FC_FULLNAME: &str = "fullname"; // String
pub const FC_FAMILYLANG: &str = "familylang"; // String (RFC 3066)
pub const FC_STYLELANG: &str = "stylelang"; // String (RFC 3066)
pub const FC_FULLNAMELANG: &str = "fullnamelang"; // String (RFC 3066)
pub const FC_CAPABILITY: &str = "capability"; // String
pub const FC_FONTFORMAT: &str = "fontformat"; // String
pub const FC_EMBOLDEN: &str = "embolden"; // Bool
pub const FC_EMBEDDED_BITMAP: &str = "embeddedbitmap"; // Bool
pub const FC_DECORATIVE: &str = "decorative"; // Bool
pub const FC_LCD_FILTER: &str = "lcdfilter"; // Int
pub const FC_FONT_FEATURES: &str = "fontfeatures"; // String
pub const FC_NAMELANG: &str = "namelang"; // String (RFC 3866)
pub const FC_PRGNAME: &str = "prgname"; // String
pub const FC_HASH: &str = "hash"; // String
pub const FC_POSTSCRIPT_NAME: &str = "postscriptname"; // String
pub const FC_CHAR_WIDTH: &str = "charwidth"; // Int
pub const FC_CHAR_HEIGHT: &str = "charheight"; // Int
pub const FC_MATRIX: &str = "matrix"; // FcMatrix

pub const FC_WEIGHT_THIN: c_int = 0;
pub const FC_WEIGHT_EXTRALIGHT: c_int = 40;
pub const FC_WEIGHT_ULTRALIGHT: c_int = FC_WEIGHT_EXTRALIGHT;
pub const FC_WEIGHT_LIGHT: c_int = 50;
pub const FC_WEIGHT_BOOK: c_int = 75;
pub const FC_WEIGHT_REGULAR: c_int = 80;
pub const FC_WEIGHT_NORMAL: c_int = FC_WEIGHT_REGULAR;
pub const FC_WEIGHT_MEDIUM: c_int = 100;
pub const FC_WEIGHT_DEMIBOLD: c_int = 180;
pub const FC_WEIGHT_SEMIBOLD: c_int = FC_WEIGHT_DEMIBOLD;
pub const FC_WEIGHT_BOLD: c_int = 200;
pub const FC_WEIGHT_EXTRABOLD: c_int = 205;
pub const FC_WEIGHT_ULTRABOLD: c_int = FC_WEIGHT_EXTRABOLD;
pub const FC_WEIGHT_BLACK: c_int = 210;
pub const FC_WEIGHT_HEAVY: c_int = FC_WEIGHT_BLACK;
pub const FC_WEIGHT_EXTRABLACK: c_int = 215;
pub const FC_WEIGHT_ULTRABLACK: c_int = FC_WEIGHT_EXTRABLACK;

pub const FC_SLANT_ROMAN: c_int = 0;
pub const FC_SLANT_ITALIC: c_int = 100;
pub const FC_SLANT_OBLIQUE: c_int = 110;

pub const FC_WIDTH_ULTRACONDENSED: c_int = 50;
pub const FC_WIDTH_EXTRACONDENSED: c_int = 63;
pub const FC_WIDTH_CONDENSED: c_int = 75;
pub const FC_WIDTH_SEMICONDENSED: c_int = 87;
pub const FC_WIDTH_NORMAL: c_int = 100;
pub const FC_WIDTH_SEMIEXPANDED: c_int = 113;
pub const FC_WIDTH_EXPANDED: c_int = 125;
pub const FC_WIDTH_EXTRAEXPANDED: c_int = 150;
pub const FC_WIDTH_ULTRAEXPANDED: c_int = 200;

pub const FC_PROPORTIONAL: c_int = 0;
pub const FC_DUAL: c_int = 90;
pub const FC_MONO: c_int = 100;
pub const FC_CHARCELL: c_int = 110;

// Sub-pixel order.
pub const FC_RGBA_UNKNOWN: c_int = 0;
pub const FC_RGBA_RGB: c_int = 1;
pub const FC_RGBA_BGR: c_int = 2;
pub const FC_RGBA_VRGB: c_int = 3;
pub const FC_RGBA_VBGR: c_int = 4;
pub const FC_RGBA_NONE: c_int = 5;

// Hinting style.
pub const FC_HINT_NONE: c_int = 0;
pub const FC_HINT_SLIGHT: c_int = 1;
pub const FC_HINT_MEDIUM: c_int = 2;
pub const FC_HINT_FULL: c_int = 3;

// LCD filter.
pub const FC_LCD_NONE: c_int = 0;
pub const FC_LCD_DEFAULT: c_int = 1;
pub const FC_LCD_LIGHT: c_int = 2;
pub const FC_LCD_LEGACY: c_int = 3;
