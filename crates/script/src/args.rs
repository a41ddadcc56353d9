// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of builder parameters.
//!
//! Builder calls accept "one or many" arguments and "text, number or nested
//! script" values. Both are converted here, at the call boundary, so the
//! builder itself only ever sees a list of strings or a [`Value`].

use psh_core::quote;

use crate::Script;

/// Ordered command arguments.
///
/// ```
/// use psh_script::Args;
///
/// assert_eq!(Args::from("a.txt").join(), "a.txt");
/// assert_eq!(Args::from(["-r", "dir"]).join(), "-r dir");
/// assert_eq!(Args::from(vec![-15, 1]).join(), "-15 1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(Vec<String>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, arg: impl Into<String>) {
        self.0.push(arg.into());
    }

    /// Prepend option tokens, keeping their order.
    pub fn with_options(mut self, options: &[&str]) -> Self {
        let mut args: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        args.append(&mut self.0);
        Self(args)
    }

    /// No arguments, or only empty/blank ones.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|arg| arg.trim().is_empty())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Arguments separated by single spaces.
    pub fn join(&self) -> String {
        self.0.join(" ")
    }

    /// Each argument escaped for the shell.
    pub(crate) fn escaped(&self) -> Result<Args, psh_core::EscapeError> {
        self.0
            .iter()
            .map(|arg| quote::escape_arg(arg))
            .collect::<Result<Vec<_>, _>>()
            .map(Args)
    }
}

impl From<&str> for Args {
    fn from(arg: &str) -> Self {
        Self(vec![arg.to_string()])
    }
}

impl From<String> for Args {
    fn from(arg: String) -> Self {
        Self(vec![arg])
    }
}

impl From<&String> for Args {
    fn from(arg: &String) -> Self {
        Self(vec![arg.clone()])
    }
}

impl<T: ToString> From<Vec<T>> for Args {
    fn from(args: Vec<T>) -> Self {
        Self(args.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for Args {
    fn from(args: &[T]) -> Self {
        Self(args.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for Args {
    fn from(args: [T; N]) -> Self {
        Self(args.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<&[T; N]> for Args {
    fn from(args: &[T; N]) -> Self {
        Self(args.iter().map(ToString::to_string).collect())
    }
}

/// Right-hand side of an assignment, or the body of a `trap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Text(String),
    /// Rendered via [`Script::generate`].
    Script(Script),
}

impl Value {
    /// Text as written, without quoting. Nested scripts are generated.
    pub fn render_raw(&self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::Text(text) => text.clone(),
            Value::Script(script) => script.generate(),
        }
    }

    /// Text for the right-hand side of `var=...`.
    ///
    /// Numbers and backtick substitutions are left bare, nested scripts
    /// become backtick substitutions, and everything else is double-quoted.
    pub fn render_assignment(&self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::Text(text) if quote::is_numeric(text) || quote::is_backticked(text) => {
                text.clone()
            }
            Value::Text(text) => quote::double_quote(text),
            Value::Script(script) => quote::backtick(&script.generate()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Script> for Value {
    fn from(script: Script) -> Self {
        Value::Script(script)
    }
}

impl From<&Script> for Value {
    fn from(script: &Script) -> Self {
        Value::Script(script.clone())
    }
}

impl From<&mut Script> for Value {
    fn from(script: &mut Script) -> Self {
        Value::Script(script.clone())
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
