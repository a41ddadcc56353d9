// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Fluent builder for POSIX shell scripts.
//!
//! A [`Script`] accumulates commands, connectors and control structures and
//! serializes them to shell text with [`Script::generate`].
//!
//! # Quick Start
//!
//! ```
//! use psh_script::{Condition, Script};
//!
//! let mut script = Script::new();
//! script
//!     .shebang_default()?
//!     .echo("hello")?
//!     .pipe()?
//!     .cat(None)?
//!     .if_(Condition::new().file_exists("/etc/hosts"), |body| {
//!         body.echo_line("found")?;
//!         Ok(())
//!     })?
//!     .fi()?;
//!
//! assert_eq!(
//!     script.generate(),
//!     "#!/bin/sh\necho -n hello | cat\nif [ -f /etc/hosts ]; then\n\techo found\nfi"
//! );
//! # Ok::<(), psh_script::ScriptError>(())
//! ```
//!
//! # Layout
//!
//! ```text
//! Script
//! ├── LineBuffer          fragments + open/closed line state
//! │   └── Fragment        Line (indented on output) | Block (verbatim)
//! ├── RenderConfig        indent, line ending, interpreter
//! └── open if chains      elif/else/fi bookkeeping
//! ```
//!
//! Nested bodies (`if_`, `while_`, `switch`, `case`) are built in a child
//! script one level deeper and pushed into the parent as a single block.

mod args;
mod buffer;
mod condition;
mod error;
mod redirect;
mod script;

pub use args::{Args, Value};
pub use buffer::{Fragment, LineBuffer};
pub use condition::{Condition, FileTest};
pub use error::ScriptError;
pub use redirect::RedirectOp;
pub use script::{BuildResult, CountMode, Script, TestStyle};

// Shared types from psh-core
pub use psh_core::{DateFormat, Indent, LineEnding, RenderConfig, Signal};
