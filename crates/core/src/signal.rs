// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! POSIX signal names and numbers used by `kill` and `trap`.
//!
//! The set is closed: anything outside the table is rejected with
//! [`UnknownSignal`] instead of being passed through as a bare integer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Signal lookup failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnknownSignal {
    #[error("unknown signal number: {0}")]
    Number(i32),

    #[error("unknown signal name: {0}")]
    Name(String),
}

/// Generates the [`Signal`] enum together with its name/number table.
macro_rules! define_signals {
    ($($(#[$meta:meta])* $variant:ident = $num:literal,)+) => {
        /// A POSIX signal, identified by its conventional Linux number.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub enum Signal {
            $($(#[$meta])* $variant = $num,)+
        }

        impl Signal {
            /// Every known signal, in ascending numeric order.
            pub const ALL: &'static [Signal] = &[$(Signal::$variant,)+];

            /// Numeric value as understood by `kill -N` and `trap`.
            pub fn number(self) -> i32 {
                self as i32
            }

            /// Canonical name including the `SIG` prefix.
            pub fn name(self) -> &'static str {
                match self {
                    $(Signal::$variant => stringify!($variant),)+
                }
            }
        }

        impl TryFrom<i32> for Signal {
            type Error = UnknownSignal;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $($num => Ok(Signal::$variant),)+
                    other => Err(UnknownSignal::Number(other)),
                }
            }
        }
    };
}

define_signals! {
    /// Hangup
    SIGHUP = 1,
    /// Interrupt from keyboard
    SIGINT = 2,
    SIGQUIT = 3,
    SIGILL = 4,
    SIGTRAP = 5,
    SIGABRT = 6,
    SIGBUS = 7,
    SIGFPE = 8,
    /// Cannot be caught or ignored
    SIGKILL = 9,
    SIGUSR1 = 10,
    SIGSEGV = 11,
    SIGUSR2 = 12,
    SIGPIPE = 13,
    SIGALRM = 14,
    /// Default signal sent by `kill`
    SIGTERM = 15,
    SIGSTKFLT = 16,
    SIGCHLD = 17,
    SIGCONT = 18,
    /// Cannot be caught or ignored
    SIGSTOP = 19,
    SIGTSTP = 20,
    SIGTTIN = 21,
    SIGTTOU = 22,
    SIGURG = 23,
    SIGXCPU = 24,
    SIGXFSZ = 25,
    SIGVTALRM = 26,
    SIGPROF = 27,
    SIGWINCH = 28,
    SIGIO = 29,
    SIGPWR = 30,
    SIGSYS = 31,
}

impl From<Signal> for i32 {
    fn from(signal: Signal) -> Self {
        signal.number()
    }
}

impl Default for Signal {
    fn default() -> Self {
        Signal::SIGTERM
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Accepts `SIGTERM`, `TERM` (any case) or a decimal number.
impl FromStr for Signal {
    type Err = UnknownSignal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(num) = trimmed.parse::<i32>() {
            return Signal::try_from(num);
        }

        let upper = trimmed.to_ascii_uppercase();
        let bare = upper.strip_prefix("SIG").unwrap_or(&upper);
        Signal::ALL
            .iter()
            .copied()
            .find(|sig| &sig.name()[3..] == bare)
            .ok_or_else(|| UnknownSignal::Name(s.to_string()))
    }
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
