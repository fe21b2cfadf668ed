//! Error handling and result types for Buildscout.
//!
//! Detection itself never fails: every per-file or per-directory problem
//! degrades to "no signal" and a scan always produces a result. The
//! fallible surface is limited to the CLI boundary (bad arguments, an
//! unreadable root path, serialization), which reports through
//! `color-eyre` for contextual error output.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout Buildscout.
///
/// Type alias for `color_eyre::eyre::Result<T>`. Use `.wrap_err()` to add
/// context as errors propagate toward the CLI boundary.
pub type Result<T> = EyreResult<T>;
