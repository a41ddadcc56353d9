// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test expressions for `if`, `elif` and `while` headers.
//!
//! A [`Condition`] is an ordered list of tokens joined by single spaces.
//! Tokens are never reordered or grouped, so precedence is whatever order
//! the calls were made in.
//!
//! ```
//! use psh_script::Condition;
//!
//! let cond = Condition::new().is("i").less_than(10).and().not().is_dir("/tmp/x");
//! assert_eq!(cond.generate(), "$i -lt 10 -a ! -d /tmp/x");
//! ```

use std::fmt;

/// File test operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTest {
    /// `-f`: regular file exists
    File,
    /// `-r`
    Readable,
    /// `-w`
    Writable,
    /// `-x`
    Executable,
    /// `-s`: exists and is larger than zero bytes
    NotEmpty,
    /// `-e`: any kind of path exists
    Exists,
    /// `-d`
    Directory,
}

impl FileTest {
    pub fn flag(self) -> &'static str {
        match self {
            FileTest::File => "-f",
            FileTest::Readable => "-r",
            FileTest::Writable => "-w",
            FileTest::Executable => "-x",
            FileTest::NotEmpty => "-s",
            FileTest::Exists => "-e",
            FileTest::Directory => "-d",
        }
    }
}

/// Ordered sequence of test tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Condition {
    tokens: Vec<String>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw expression such as `"$i"`. An empty expression adds
    /// no token.
    pub fn from_expr(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        let condition = Self::new();
        if expression.is_empty() {
            condition
        } else {
            condition.push(expression)
        }
    }

    /// Reference a variable; `i` becomes `$i`.
    pub fn is(self, variable: &str) -> Self {
        let variable = dollar(variable);
        self.push(variable)
    }

    /// Raw token, appended as given.
    pub fn token(self, token: impl Into<String>) -> Self {
        self.push(token.into())
    }

    pub fn not(self) -> Self {
        self.push("!".to_string())
    }

    pub fn and(self) -> Self {
        self.push("-a".to_string())
    }

    pub fn or(self) -> Self {
        self.push("-o".to_string())
    }

    pub fn equals(self, value: impl fmt::Display) -> Self {
        self.push(format!("-eq {}", value))
    }

    pub fn not_equals(self, value: impl fmt::Display) -> Self {
        self.push(format!("-ne {}", value))
    }

    pub fn greater_than(self, value: impl fmt::Display) -> Self {
        self.push(format!("-gt {}", value))
    }

    pub fn less_than(self, value: impl fmt::Display) -> Self {
        self.push(format!("-lt {}", value))
    }

    /// `-ge`
    pub fn not_less_than(self, value: impl fmt::Display) -> Self {
        self.push(format!("-ge {}", value))
    }

    /// `-le`
    pub fn not_greater_than(self, value: impl fmt::Display) -> Self {
        self.push(format!("-le {}", value))
    }

    /// `-z "$var"`
    pub fn is_empty(self, variable: &str) -> Self {
        let variable = dollar(variable);
        self.push(format!("-z \"{}\"", variable))
    }

    /// `-n "$var"`
    pub fn is_not_empty(self, variable: &str) -> Self {
        let variable = dollar(variable);
        self.push(format!("-n \"{}\"", variable))
    }

    /// True when the variable is *unset*: `-z "${var+x}"`.
    ///
    /// `${var+x}` expands to `x` only when `var` is set, even to the empty
    /// string, so combine with [`not`](Self::not) to test for presence.
    pub fn isset(self, variable: &str) -> Self {
        let name = variable.strip_prefix('$').unwrap_or(variable);
        self.is_empty(&format!("{{{}+x}}", name))
    }

    pub fn check_path(self, test: FileTest, path: &str) -> Self {
        self.push(format!("{} {}", test.flag(), path))
    }

    pub fn file_exists(self, path: &str) -> Self {
        self.check_path(FileTest::File, path)
    }

    /// Alias of [`file_exists`](Self::file_exists).
    pub fn is_file(self, path: &str) -> Self {
        self.file_exists(path)
    }

    pub fn readable(self, path: &str) -> Self {
        self.check_path(FileTest::Readable, path)
    }

    pub fn writable(self, path: &str) -> Self {
        self.check_path(FileTest::Writable, path)
    }

    pub fn executable(self, path: &str) -> Self {
        self.check_path(FileTest::Executable, path)
    }

    pub fn not_empty_file(self, path: &str) -> Self {
        self.check_path(FileTest::NotEmpty, path)
    }

    pub fn path_exists(self, path: &str) -> Self {
        self.check_path(FileTest::Exists, path)
    }

    pub fn is_dir(self, path: &str) -> Self {
        self.check_path(FileTest::Directory, path)
    }

    /// Alias of [`is_dir`](Self::is_dir).
    pub fn directory_exists(self, path: &str) -> Self {
        self.is_dir(path)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens joined by single spaces, in the order they were added.
    pub fn generate(&self) -> String {
        self.tokens.join(" ")
    }

    fn push(mut self, token: String) -> Self {
        self.tokens.push(token);
        self
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate())
    }
}

fn dollar(variable: &str) -> String {
    if variable.starts_with('$') {
        variable.to_string()
    } else {
        format!("${}", variable)
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
