// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chained builder producing POSIX shell script text.
//!
//! Every call writes into the script's [`LineBuffer`]: commands start (or,
//! after a connector, finish) a line, while connectors such as `|`, `&&`
//! and redirections extend the current one. Control structures build their
//! body in a child script one level deeper and embed its output.
//!
//! # Example
//!
//! ```
//! use psh_script::{Condition, Script};
//!
//! # fn main() -> Result<(), psh_script::ScriptError> {
//! let mut script = Script::new();
//! script
//!     .set("i", 0)?
//!     .while_(Condition::new().is("i").less_than(3), |body| {
//!         body.echo("$i")?.increment("i", 1)?;
//!         Ok(())
//!     })?;
//!
//! assert_eq!(
//!     script.generate(),
//!     "i=0\nwhile [ $i -lt 3 ]; do\n\techo -n $i\n\ti=$((i+1))\ndone"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Failure
//!
//! Builder calls return `Result<&mut Script, ScriptError>`. A call that fails
//! leaves the script exactly as it was.

mod commands;
mod control;

pub use commands::CountMode;
pub use control::TestStyle;

use std::fmt;

use psh_core::{quote, RenderConfig};

use crate::args::{Args, Value};
use crate::buffer::LineBuffer;
use crate::redirect::RedirectOp;
use crate::ScriptError;

/// Result of a builder call; `Ok` carries the script for chaining.
pub type BuildResult<'a> = Result<&'a mut Script, ScriptError>;

/// POSIX shell script builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    buffer: LineBuffer,
    config: RenderConfig,
    /// `if` chains opened in this script and not yet closed by `fi`/`else`.
    open_ifs: usize,
}

impl Script {
    /// Empty top-level script with default rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty top-level script rendered with `config`.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Nesting depth; 0 for a top-level script.
    pub fn depth(&self) -> usize {
        self.buffer.depth()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Serialize the script. Does not consume or change it.
    pub fn generate(&self) -> String {
        self.buffer
            .generate(self.config.indent, self.config.line_ending)
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// `name arg1 arg2`. An empty `name` writes just the arguments, which is
    /// the way to hand-write a raw line.
    pub fn command(&mut self, name: &str, args: impl Into<Args>) -> BuildResult<'_> {
        let line = command_line(name, &args.into());
        self.buffer.write_line(line)?;
        Ok(self)
    }

    /// Like [`command`](Self::command) with the name and every argument
    /// escaped for the shell.
    pub fn command_escaped(&mut self, name: &str, args: impl Into<Args>) -> BuildResult<'_> {
        let line = escaped_command_line(name, &args.into())?;
        self.buffer.write_line(line)?;
        Ok(self)
    }

    /// Command prefixed by environment assignments on the same line, e.g.
    /// `DEBIAN_FRONTEND="noninteractive" apt-get update`.
    pub fn command_with_env(
        &mut self,
        env: impl Into<Value>,
        name: &str,
        args: impl Into<Args>,
    ) -> BuildResult<'_> {
        let line = command_line(name, &args.into());
        self.write_with_env(env.into(), line)
    }

    pub fn command_with_env_escaped(
        &mut self,
        env: impl Into<Value>,
        name: &str,
        args: impl Into<Args>,
    ) -> BuildResult<'_> {
        let line = escaped_command_line(name, &args.into())?;
        self.write_with_env(env.into(), line)
    }

    /// Append raw text to the current line and keep it open.
    pub fn put(&mut self, text: &str, allow_on_empty: bool) -> BuildResult<'_> {
        self.buffer.extend_line(text, allow_on_empty)?;
        Ok(self)
    }

    /// `|`
    pub fn pipe(&mut self) -> BuildResult<'_> {
        self.put("|", false)
    }

    /// `&&`
    pub fn and(&mut self) -> BuildResult<'_> {
        self.put("&&", false)
    }

    /// `||`
    pub fn or(&mut self) -> BuildResult<'_> {
        self.put("||", false)
    }

    /// `;` directly after the current line. The line stays open so the
    /// next command follows on it.
    pub fn semicolon(&mut self) -> BuildResult<'_> {
        self.put(";", false)
    }

    /// Backslash-newline continuation, optionally indenting the next
    /// physical line with a tab.
    pub fn next_line(&mut self, with_tab: bool) -> BuildResult<'_> {
        self.put(if with_tab { "\\\n\t" } else { "\\\n" }, false)
    }

    /// `{fd}{op} {dst}` appended to the current command, e.g. `1>> /tmp/out`.
    /// The line is closed afterwards.
    pub fn redirect(&mut self, fd: u32, op: &str, dst: &str) -> BuildResult<'_> {
        let op: RedirectOp = op.parse()?;
        let target = format!("{}{} {}", fd, op, dst);
        self.buffer.extend_line(target.trim_end(), false)?;
        self.buffer.end_line();
        Ok(self)
    }

    // -------------------------------------------------------------------------
    // Variables
    // -------------------------------------------------------------------------

    /// `var=value`. Text is double-quoted unless numeric or already a
    /// backtick substitution; a nested script becomes `` `...` ``.
    pub fn set(&mut self, variable: &str, value: impl Into<Value>) -> BuildResult<'_> {
        self.assign(variable, value.into(), false)
    }

    /// `export var=value`, quoted as in [`set`](Self::set).
    pub fn export(&mut self, variable: &str, value: impl Into<Value>) -> BuildResult<'_> {
        self.assign(variable, value.into(), true)
    }

    /// `var=$((var+by))`
    pub fn increment(&mut self, variable: &str, by: i64) -> BuildResult<'_> {
        let variable = require("variable", variable)?;
        self.command(&format!("{0}=$(({0}+{1}))", variable, by), Args::new())
    }

    /// `var=$((var-by))`
    pub fn decrement(&mut self, variable: &str, by: i64) -> BuildResult<'_> {
        let variable = require("variable", variable)?;
        self.command(&format!("{0}=$(({0}-{1}))", variable, by), Args::new())
    }

    // -------------------------------------------------------------------------
    // Script structure
    // -------------------------------------------------------------------------

    /// `#!path args`. Must be the very first line of a top-level script.
    pub fn shebang(&mut self, path: &str, args: impl Into<Args>) -> BuildResult<'_> {
        if !self.buffer.is_empty() || self.depth() > 0 {
            tracing::debug!(
                depth = self.depth(),
                fragments = self.buffer.len(),
                "rejected late shebang"
            );
            return Err(ScriptError::Ordering {
                operation: "shebang",
            });
        }
        let path = require("interpreter", path)?;
        let line = command_line(&format!("#!{}", path), &args.into());
        self.buffer.start_line(line);
        Ok(self)
    }

    /// Shebang for the configured interpreter (`#!/bin/sh` by default).
    pub fn shebang_default(&mut self) -> BuildResult<'_> {
        let interpreter = self.config.interpreter.clone();
        self.shebang(&interpreter, Args::new())
    }

    /// Append another script's output as a block, re-indented to this
    /// script's depth.
    pub fn embed(&mut self, other: &Script) -> BuildResult<'_> {
        if other.is_empty() {
            return Ok(self);
        }
        let prefix = self.config.indent.repeat(self.depth());
        let ending = self.config.line_ending.as_str();
        let text = other
            .generate()
            .split(ending)
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join(ending);
        self.buffer.push_block(text);
        Ok(self)
    }

    /// Build a child script one level deeper, run `build` against it and
    /// return its serialized text. `None` when the body wrote nothing; an
    /// `if` left open inside the body is a [`ScriptError::State`].
    fn compose<F>(&self, build: F) -> Result<Option<String>, ScriptError>
    where
        F: FnOnce(&mut Script) -> Result<(), ScriptError>,
    {
        let mut child = Script {
            buffer: LineBuffer::new(self.depth() + 1),
            config: self.config.clone(),
            open_ifs: 0,
        };
        build(&mut child)?;

        if child.open_ifs > 0 {
            tracing::debug!(
                depth = child.depth(),
                open_ifs = child.open_ifs,
                "nested block left if chains open"
            );
            return Err(ScriptError::State("nested block left an if chain open"));
        }
        if child.is_empty() {
            tracing::debug!(depth = child.depth(), "nested block is empty");
            return Ok(None);
        }
        tracing::debug!(
            depth = child.depth(),
            fragments = child.buffer.len(),
            "composed nested block"
        );
        Ok(Some(child.generate()))
    }

    fn assign(&mut self, variable: &str, value: Value, export: bool) -> BuildResult<'_> {
        let variable = require("variable", variable)?;
        let assignment = format!("{}={}", variable, value.render_assignment());
        if export {
            self.command("export", [assignment])
        } else {
            self.command("", [assignment])
        }
    }

    fn write_with_env(&mut self, env: Value, line: String) -> BuildResult<'_> {
        let env = env.render_raw();
        let env = env.trim();
        let line = if env.is_empty() {
            line
        } else if line.is_empty() {
            env.to_string()
        } else {
            format!("{} {}", env, line)
        };
        self.buffer.write_line(line)?;
        Ok(self)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate())
    }
}

fn command_line(name: &str, args: &Args) -> String {
    if name.is_empty() {
        return args.join().trim().to_string();
    }
    format!("{} {}", name, args.join()).trim().to_string()
}

fn escaped_command_line(name: &str, args: &Args) -> Result<String, ScriptError> {
    let args = args.escaped()?;
    if name.is_empty() {
        return Ok(command_line(name, &args));
    }
    let name = quote::escape_command(name)?;
    Ok(command_line(&name, &args))
}

/// Reject blank required arguments.
fn require<'a>(argument: &'static str, value: &'a str) -> Result<&'a str, ScriptError> {
    if value.trim().is_empty() {
        return Err(ScriptError::MissingArgument { argument });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../script_tests/mod.rs"]
mod tests;
