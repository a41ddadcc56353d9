// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! psh-core: lookup tables, quoting and render settings shared by the
//! script builder.

pub mod config;
pub mod date;
pub mod quote;
pub mod signal;

pub use config::{ConfigError, Indent, LineEnding, RenderConfig, MAX_INDENT_SPACES};
pub use date::DateFormat;
pub use quote::EscapeError;
pub use signal::{Signal, UnknownSignal};
