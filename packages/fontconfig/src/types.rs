//! Typed mirrors of fontconfig's small C enums.

use fontconfig_sys as sys;

use crate::error::Error;

/// Which of a config's font sets to address (`FcSetName`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetName {
    /// Fonts found by scanning the configured system directories.
    System,
    /// Fonts added by the application at runtime.
    Application,
}

impl SetName {
    pub(crate) fn to_raw(self) -> sys::FcSetName {
        match self {
            SetName::System => sys::FcSetSystem,
            SetName::Application => sys::FcSetApplication,
        }
    }
}

impl TryFrom<i32> for SetName {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Error> {
        match raw {
            sys::FcSetSystem => Ok(SetName::System),
            sys::FcSetApplication => Ok(SetName::Application),
            found => Err(Error::TypeMismatch {
                expected: "FcSetName",
                found,
            }),
        }
    }
}

/// Which phase of matching a substitution applies to (`FcMatchKind`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Substitutions applied to the application's query pattern.
    Pattern,
    /// Substitutions applied to a matched font.
    Font,
    /// Substitutions applied while scanning font files.
    Scan,
}

impl MatchKind {
    pub(crate) fn to_raw(self) -> sys::FcMatchKind {
        match self {
            MatchKind::Pattern => sys::FcMatchPattern,
            MatchKind::Font => sys::FcMatchFont,
            MatchKind::Scan => sys::FcMatchScan,
        }
    }
}

impl TryFrom<i32> for MatchKind {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Error> {
        match raw {
            sys::FcMatchPattern => Ok(MatchKind::Pattern),
            sys::FcMatchFont => Ok(MatchKind::Font),
            sys::FcMatchScan => Ok(MatchKind::Scan),
            found => Err(Error::TypeMismatch {
                expected: "FcMatchKind",
                found,
            }),
        }
    }
}

/// Outcome code reported by fontconfig query calls (`FcResult`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    Match,
    NoMatch,
    TypeMismatch,
    NoId,
    OutOfMemory,
}

impl TryFrom<i32> for MatchResult {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Error> {
        match raw {
            sys::FcResultMatch => Ok(MatchResult::Match),
            sys::FcResultNoMatch => Ok(MatchResult::NoMatch),
            sys::FcResultTypeMismatch => Ok(MatchResult::TypeMismatch),
            sys::FcResultNoId => Ok(MatchResult::NoId),
            sys::FcResultOutOfMemory => Ok(MatchResult::OutOfMemory),
            found => Err(Error::TypeMismatch {
                expected: "FcResult",
                found,
            }),
        }
    }
}
