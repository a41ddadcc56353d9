// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering configuration for generated scripts.
//!
//! ```toml
//! indent = { spaces = 4 }
//! line_ending = "lf"
//! interpreter = "/bin/sh"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a [`RenderConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Widest indentation step accepted for [`Indent::Spaces`].
pub const MAX_INDENT_SPACES: usize = 16;

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Text for `depth` levels of indentation.
    pub fn repeat(self, depth: usize) -> String {
        match self {
            Indent::Tab => "\t".repeat(depth),
            Indent::Spaces(n) => " ".repeat(n.min(MAX_INDENT_SPACES).saturating_mul(depth)),
        }
    }
}

/// Separator placed between emitted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// How a script is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Indentation unit, repeated once per nesting level.
    pub indent: Indent,
    /// Line separator.
    pub line_ending: LineEnding,
    /// Interpreter used by a shebang without an explicit path.
    pub interpreter: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: Indent::Tab,
            line_ending: LineEnding::Lf,
            interpreter: "/bin/sh".to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded render config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent == Indent::Spaces(0) {
            return Err(ConfigError::Invalid(
                "indent must be at least one space".to_string(),
            ));
        }
        if let Indent::Spaces(n) = self.indent {
            if n > MAX_INDENT_SPACES {
                return Err(ConfigError::Invalid(format!(
                    "indent must be at most {} spaces",
                    MAX_INDENT_SPACES
                )));
            }
        }
        if self.interpreter.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "interpreter cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
