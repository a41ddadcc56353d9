// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection operators accepted by [`Script::redirect`](crate::Script::redirect).

use std::fmt;
use std::str::FromStr;

use crate::ScriptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectOp {
    /// `>`
    Write,
    /// `>>`
    Append,
    /// `<`
    Read,
    /// `<<`
    HereDoc,
    /// `>&`
    DupOut,
    /// `<&`
    DupIn,
    /// `>&-`
    CloseOut,
    /// `<&-`
    CloseIn,
}

impl RedirectOp {
    pub const ALL: [RedirectOp; 8] = [
        RedirectOp::Write,
        RedirectOp::Append,
        RedirectOp::Read,
        RedirectOp::HereDoc,
        RedirectOp::DupOut,
        RedirectOp::DupIn,
        RedirectOp::CloseOut,
        RedirectOp::CloseIn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RedirectOp::Write => ">",
            RedirectOp::Append => ">>",
            RedirectOp::Read => "<",
            RedirectOp::HereDoc => "<<",
            RedirectOp::DupOut => ">&",
            RedirectOp::DupIn => "<&",
            RedirectOp::CloseOut => ">&-",
            RedirectOp::CloseIn => "<&-",
        }
    }
}

impl fmt::Display for RedirectOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedirectOp {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RedirectOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ScriptError::InvalidOperator { op: s.to_string() })
    }
}

#[cfg(test)]
#[path = "redirect_tests.rs"]
mod tests;
