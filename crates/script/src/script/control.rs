// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conditionals, `case` and `while` blocks.
//!
//! An `if` chain is open from `if_` until `fi`/`endif` or `else_`:
//!
//! ```text
//! if_ ──▶ OPEN ──elif──▶ OPEN
//!          │
//!          ├──else_──▶ CLOSED (emits fi)
//!          └──fi─────▶ CLOSED
//! ```
//!
//! `elif`, `else_` and `fi` with no open chain fail with
//! [`ScriptError::State`].

use std::fmt;

use super::{BuildResult, Script};
use crate::ScriptError;

/// Bracket style of a test header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestStyle {
    /// `[ ... ]`
    #[default]
    Posix,
    /// `[[ ... ]]`
    Extended,
}

impl TestStyle {
    fn brackets(self) -> (&'static str, &'static str) {
        match self {
            TestStyle::Posix => ("[", "]"),
            TestStyle::Extended => ("[[", "]]"),
        }
    }
}

impl Script {
    /// `if [ condition ]; then` followed by the body. Close the chain with
    /// [`fi`](Self::fi) or [`else_`](Self::else_).
    pub fn if_<F>(&mut self, condition: impl fmt::Display, body: F) -> BuildResult<'_>
    where
        F: FnOnce(&mut Script) -> Result<(), ScriptError>,
    {
        self.if_with(condition, TestStyle::Posix, body)
    }

    pub fn if_with<F>(
        &mut self,
        condition: impl fmt::Display,
        style: TestStyle,
        body: F,
    ) -> BuildResult<'_>
    where
        F: FnOnce(&mut Script) -> Result<(), ScriptError>,
    {
        self.conditional_arm("if", &condition.to_string(), style, body)?;
        self.open_ifs += 1;
        Ok(self)
    }

    /// `elif [ condition ]; then` followed by the body.
    pub fn elif<F>(&mut self, condition: impl fmt::Display, body: F) -> BuildResult<'_>
    where
        F: FnOnce(&mut Script) -> Result<(), ScriptError>,
    {
        self.elif_with(condition, TestStyle::Posix, body)
    }

    pub fn elif_with<F>(
        &mut self,
        condition: impl fmt::Display,
        style: TestStyle,
        body: F,
    ) -> BuildResult<'_>
    where
        F: FnOnce(&mut Script) -> Result<(), ScriptError>,
    {
        self.require_open_if("elif without an open if")?;
        self.conditional_arm("elif", &condition.to_string(), style, body)?;
        Ok(self)
    }

    /// `else`, the body, then `fi`. Nothing can be chained after it.
    pub fn else_<F>(&mut self, body: F) -> BuildResult<'_>
    where
        F: FnOnce(&mut Script) -> Result<(), ScriptError>,
    {
        self.require_open_if("else without an open if")?;
        let block = self.compose(body)?;
        self.buffer.start_line("else");
        self.push_body(block);
        self.buffer.start_line("fi");
        self.open_ifs -= 1;
        Ok(self)
    }

    /// Close the innermost open `if` chain.
    pub fn fi(&mut self) -> BuildResult<'_> {
        self.require_open_if("fi without an open if")?;
        self.buffer.start_line("fi");
        self.open_ifs -= 1;
        Ok(self)
    }

    /// Alias of [`fi`](Self::fi).
    pub fn endif(&mut self) -> BuildResult<'_> {
        self.fi()
    }

    /// `case $variable in`, the arms added by `body` via [`case`](Self::case),
    /// then `esac`.
    pub fn switch<F>(&mut self, variable: &str, body: F) -> BuildResult<'_>
    where
        F: FnOnce(&mut Script) -> Result<(), ScriptError>,
    {
        let name = variable.strip_prefix('$').unwrap_or(variable);
        if name.trim().is_empty() {
            return Err(ScriptError::MissingArgument {
                argument: "variable",
            });
        }
        let block = self.compose(body)?;
        self.buffer.write_line(format!("case ${} in", name))?;
        self.push_optional_block(block);
        self.buffer.start_line("esac");
        Ok(self)
    }

    /// One `pattern)` arm terminated by `;;`.
    pub fn case<F>(&mut self, pattern: &str, body: F) -> BuildResult<'_>
    where
        F: FnOnce(&mut Script) -> Result<(), ScriptError>,
    {
        if pattern.trim().is_empty() {
            return Err(ScriptError::MissingArgument {
                argument: "pattern",
            });
        }
        let block = self.compose(body)?;
        self.buffer.write_line(format!("{})", pattern))?;
        self.push_optional_block(block);
        self.buffer.start_line(";;");
        Ok(self)
    }

    /// `while [ condition ]; do`, the body, then `done`.
    pub fn while_<F>(&mut self, condition: impl fmt::Display, body: F) -> BuildResult<'_>
    where
        F: FnOnce(&mut Script) -> Result<(), ScriptError>,
    {
        let block = self.compose(body)?;
        self.buffer
            .write_line(format!("while [ {} ]; do", condition))?;
        self.push_body(block);
        self.buffer.start_line("done");
        Ok(self)
    }

    fn conditional_arm<F>(
        &mut self,
        tag: &str,
        condition: &str,
        style: TestStyle,
        body: F,
    ) -> Result<(), ScriptError>
    where
        F: FnOnce(&mut Script) -> Result<(), ScriptError>,
    {
        let block = self.compose(body)?;
        let (open, close) = style.brackets();
        self.buffer
            .write_line(format!("{} {} {} {}; then", tag, open, condition, close))?;
        self.push_body(block);
        Ok(())
    }

    fn require_open_if(&self, message: &'static str) -> Result<(), ScriptError> {
        if self.open_ifs == 0 {
            tracing::debug!(depth = self.depth(), message, "rejected conditional");
            return Err(ScriptError::State(message));
        }
        Ok(())
    }

    /// Compound lists cannot be empty; an empty body becomes the null
    /// command `:`.
    fn push_body(&mut self, block: Option<String>) {
        let text = block.unwrap_or_else(|| {
            format!("{}:", self.config.indent.repeat(self.depth() + 1))
        });
        self.buffer.push_block(text);
    }

    /// `case` arms and `esac` accept an empty list.
    fn push_optional_block(&mut self, block: Option<String>) {
        if let Some(text) = block {
            self.buffer.push_block(text);
        }
    }
}
