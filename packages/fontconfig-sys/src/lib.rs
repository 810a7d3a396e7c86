//! # fontconfig-sys: raw FFI bindings to the fontconfig library
//!
//! This crate provides low-level, unsafe bindings to libfontconfig,
//! resolved at runtime with `libloading` rather than linked at build
//! time. It exposes:
//!
//! - Raw C types (`FcConfig`, `FcPattern`, `FcCharSet`, ...)
//! - The call table [`FcApi`]: one typed function pointer per
//!   fontconfig entry point, bound once when the library is opened
//! - Constants mirroring the values published in `fontconfig/*.h`
//!
//! **Most users should not use this crate directly.** The safe
//! `fontconfig` wrapper crate adds reference-counted handles, RAII
//! release, and Rust-idiomatic error handling on top of it. This crate
//! is only needed for calling entry points the wrapper does not cover,
//! or for supplying a substitute implementation of the call table
//! (see [`FcLibrary::from_api`]).
//!
//! ## Failure conventions
//!
//! fontconfig does not use a uniform failure convention. Callers must
//! check the per-function contract:
//!
//! - most mutating calls return [`FcBool`], with [`FcFalse`] meaning
//!   failure;
//! - allocating calls return a null pointer on failure;
//! - the character-set page cursor signals completion with
//!   [`FC_CHARSET_DONE`], which can appear on either the returned page
//!   base or the next-page cursor out-parameter;
//! - string-list iteration terminates with a null string pointer.
//!
//! ## Safety
//!
//! Every function pointer in [`FcApi`] is `unsafe extern "C"`. The
//! caller is responsible for pointer validity, for fontconfig's
//! reference-counting rules, and for serializing access to the
//! library's process-wide state (current config, application fonts).

#![allow(non_upper_case_globals)]
#![allow(clippy::missing_safety_doc)]

mod api;
mod consts;
mod types;

pub use api::{FcApi, FcLibrary};
pub use consts::*;
pub use types::*;
