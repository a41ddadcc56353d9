// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builder error types.

use psh_core::{EscapeError, UnknownSignal};
use thiserror::Error;

/// Errors raised by [`Script`](crate::Script) builder calls.
///
/// Every variant is a usage error: the call that raised it made no change
/// to the script, and retrying it with the same input fails again.
///
/// # Examples
///
/// ```
/// use psh_script::{Script, ScriptError};
///
/// let mut script = Script::new();
/// assert!(matches!(script.pipe(), Err(ScriptError::EmptyLine)));
/// assert!(matches!(script.sleep("soon"), Err(ScriptError::NonNumericValue { .. })));
/// assert_eq!(script.generate(), "");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// An operation that must come first was called after other content.
    #[error("{operation} must be called before anything else")]
    Ordering { operation: &'static str },

    /// A required argument was empty.
    #[error("{argument} cannot be empty")]
    MissingArgument { argument: &'static str },

    /// Redirection operator outside the supported set.
    #[error("invalid redirection operator: {op}")]
    InvalidOperator { op: String },

    /// Same-line extension with no current line to extend.
    #[error("cannot append fragment to current line, this line is empty")]
    EmptyLine,

    /// A numeric argument was given something else.
    #[error("{argument} must be numeric, got {value:?}")]
    NonNumericValue {
        argument: &'static str,
        value: String,
    },

    #[error(transparent)]
    UnknownSignal(#[from] UnknownSignal),

    /// Conditional chain misuse (`elif`/`else`/`fi` without an open `if`).
    #[error("{0}")]
    State(&'static str),

    #[error(transparent)]
    Escape(#[from] EscapeError),
}
