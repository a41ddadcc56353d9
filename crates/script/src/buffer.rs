// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line buffer that assembles emitted text into fragments.
//!
//! Each [`Fragment`] is one top-level unit of output. Whether a write opens
//! a new fragment or extends the current one is decided by a two-state flag:
//!
//! ```text
//! state    start_line        write_line          extend_line       end_line
//! closed   new -> closed     new -> closed       append -> open    closed
//! open     new -> closed     append -> closed    append -> open    closed
//! ```
//!
//! `write_line` in the open state appends and closes the line, which is how
//! `echo x | cat` ends up on one line: `pipe` opens it, `cat` closes it.

use psh_core::{Indent, LineEnding};

use crate::ScriptError;

/// One top-level unit of output text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A line owned by the buffer; indented by the buffer's depth on output.
    Line(String),
    /// Serialized nested script; already indented, emitted verbatim.
    Block(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Line(text) | Fragment::Block(text) => text,
        }
    }

    fn text_mut(&mut self) -> &mut String {
        match self {
            Fragment::Line(text) | Fragment::Block(text) => text,
        }
    }
}

/// Ordered fragments at a fixed nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    fragments: Vec<Fragment>,
    depth: usize,
    /// `true`: the next `write_line` opens a new fragment.
    pending_newline: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl LineBuffer {
    pub fn new(depth: usize) -> Self {
        Self {
            fragments: Vec::new(),
            depth,
            pending_newline: true,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Append `text` as a new fragment, whatever the current state.
    pub fn start_line(&mut self, text: impl Into<String>) {
        self.fragments.push(Fragment::Line(text.into()));
        self.pending_newline = true;
        tracing::trace!(depth = self.depth, fragments = self.fragments.len(), "start line");
    }

    /// Write a complete line: a new fragment if the previous line is closed,
    /// otherwise the end of the open line. Closes the line either way.
    pub fn write_line(&mut self, text: impl Into<String>) -> Result<(), ScriptError> {
        let text = text.into();
        if self.pending_newline {
            self.start_line(text);
            return Ok(());
        }
        self.append(&text, false)?;
        self.pending_newline = true;
        Ok(())
    }

    /// Append `text` to the current line and keep it open.
    ///
    /// Fails with [`ScriptError::EmptyLine`] when there is no current line
    /// (or it is blank), unless `allow_on_empty` is set, in which case an
    /// empty line is created first.
    pub fn extend_line(
        &mut self,
        text: impl Into<String>,
        allow_on_empty: bool,
    ) -> Result<(), ScriptError> {
        self.append(&text.into(), allow_on_empty)?;
        self.pending_newline = false;
        Ok(())
    }

    /// Close the current line: the next `write_line` opens a new fragment.
    pub fn end_line(&mut self) {
        self.pending_newline = true;
    }

    /// Append an already-serialized nested block as its own fragment.
    pub fn push_block(&mut self, text: impl Into<String>) {
        self.fragments.push(Fragment::Block(text.into()));
        self.pending_newline = true;
        tracing::trace!(depth = self.depth, fragments = self.fragments.len(), "push block");
    }

    /// Serialize all fragments. Never mutates; no trailing line ending.
    pub fn generate(&self, indent: Indent, ending: LineEnding) -> String {
        let prefix = indent.repeat(self.depth);
        self.fragments
            .iter()
            .map(|fragment| match fragment {
                Fragment::Line(text) => format!("{}{}", prefix, text),
                Fragment::Block(text) => text.clone(),
            })
            .collect::<Vec<_>>()
            .join(ending.as_str())
    }

    fn append(&mut self, text: &str, allow_on_empty: bool) -> Result<(), ScriptError> {
        match self.fragments.last() {
            None if !allow_on_empty => return Err(ScriptError::EmptyLine),
            None => self.fragments.push(Fragment::Line(String::new())),
            Some(last) if !allow_on_empty && last.text().trim().is_empty() => {
                return Err(ScriptError::EmptyLine)
            }
            Some(_) => {}
        }

        let Some(last) = self.fragments.last_mut() else {
            return Err(ScriptError::EmptyLine);
        };
        let separator = join_separator(last.text(), text);
        let current = last.text_mut();
        current.push_str(separator);
        current.push_str(text);
        tracing::trace!(depth = self.depth, fragments = self.fragments.len(), "extend line");
        Ok(())
    }
}

/// Separator between the current line and appended text.
///
/// No space after an empty line, trailing whitespace or a continuation
/// marker, and none before a `;`.
fn join_separator(current: &str, text: &str) -> &'static str {
    if current.is_empty()
        || current.ends_with(char::is_whitespace)
        || current.starts_with('\\')
        || text.starts_with(';')
    {
        ""
    } else {
        " "
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
