//! Safe, reference-counted wrappers over the fontconfig font-matching
//! library.
//!
//! fontconfig objects are manually reference counted on the C side.
//! This crate maps that model onto Rust ownership:
//!
//! - every native handle is held by exactly one wrapper object, found
//!   or created through a per-kind identity registry, so wrapping the
//!   same native pointer twice yields the same [`Config`] /
//!   [`Pattern`] / [`FontSet`] / [`Blanks`] and never double-owns it;
//! - wrappers release their native resource exactly once, on drop,
//!   and only when they own it — borrowed views (a pattern inside a
//!   font set, a config's blanks) never release and instead keep their
//!   owning object alive;
//! - paged bitmaps ([`CharSet`]) and the string cursor protocol
//!   ([`StrSet`], [`StrList`]) are exposed as ordinary Rust sets and
//!   iterators.
//!
//! The library is loaded dynamically at [`Fontconfig::open`] time; the
//! raw call table lives in the `fontconfig-sys` crate and can be
//! substituted through [`Fontconfig::open_with`].
//!
//! # Example
//!
//! ```rust,no_run
//! use fontconfig::{Config, Fontconfig, SetName};
//!
//! # fn main() -> Result<(), fontconfig::Error> {
//! let fc = Fontconfig::open()?;
//! let config = Config::current(&fc)?;
//! config.build_fonts()?;
//! for pattern in config.fonts(SetName::System)?.iter() {
//!     log::info!("font: {pattern:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! All calls are synchronous, blocking foreign calls on the caller's
//! thread. The identity registries are lock-guarded, so dropping
//! wrappers from any thread is fine. The native library's own
//! process-wide state (current config, application fonts) is *not*
//! locked here; applications using it from several threads must
//! serialize those calls. A hung native call hangs the caller; there
//! are no timeouts.

/// Re-export of the raw FFI layer for calls the wrapper does not
/// cover.
pub use fontconfig_sys as sys;

mod blanks;
mod charset;
mod config;
mod error;
mod fontset;
mod handle;
mod library;
mod pattern;
mod registry;
mod strings;
mod types;

pub use blanks::Blanks;
pub use charset::CharSet;
pub use config::Config;
pub use error::{Error, Result};
pub use fontset::{FontSet, FontSetIter};
pub use library::Fontconfig;
pub use pattern::Pattern;
pub use strings::{StrList, StrSet};
pub use types::{MatchKind, MatchResult, SetName};
