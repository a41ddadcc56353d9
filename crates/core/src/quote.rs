// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoting helpers for emitted shell text.
//!
//! Escaping of arbitrary arguments is delegated to [`shlex`]; the wrappers
//! here only add the fixed quote characters the builder needs.

use thiserror::Error;

/// An argument could not be made safe for a shell command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot escape {value:?} for the shell: {reason}")]
pub struct EscapeError {
    pub value: String,
    pub reason: String,
}

/// Surround an expression with double quotes.
pub fn double_quote(expression: &str) -> String {
    format!("\"{}\"", expression)
}

/// Backslash-escape the characters that stay special inside double quotes
/// (`\`, `"`, `$` and `` ` ``), so the text survives as one literal word.
pub fn escape_double_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Surround an expression with backticks (command substitution).
pub fn backtick(expression: &str) -> String {
    format!("`{}`", expression)
}

/// Whether the expression is already a backtick command substitution.
pub fn is_backticked(expression: &str) -> bool {
    expression.starts_with('`')
}

/// Whether the expression is a plain number and needs no quoting.
///
/// Accepts optional sign, decimal point and exponent (`-3`, `1.5`, `2e3`).
pub fn is_numeric(expression: &str) -> bool {
    let trimmed = expression.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && trimmed.chars().any(|c| c.is_ascii_digit())
        && trimmed.parse::<f64>().is_ok()
}

/// Escape a single argument so the shell sees it as one literal word.
pub fn escape_arg(arg: &str) -> Result<String, EscapeError> {
    shlex::try_quote(arg)
        .map(|quoted| quoted.into_owned())
        .map_err(|e| EscapeError {
            value: arg.to_string(),
            reason: e.to_string(),
        })
}

/// Escape a command name.
///
/// Command names follow the same rules as arguments: anything that is not
/// a plain word is quoted so metacharacters cannot start a new command.
pub fn escape_command(command: &str) -> Result<String, EscapeError> {
    escape_arg(command)
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
