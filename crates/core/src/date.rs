// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Translation of compact date-format letters into `date(1)` conversions.

use serde::{Deserialize, Serialize};

/// How the format passed to `date` should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// Already in `date(1)` syntax (`%Y-%m-%d`); passed through untouched.
    #[default]
    Native,
    /// Compact letters (`Y-m-d H:i:s`), translated with [`translate`].
    Compact,
}

/// Letter to `date(1)` conversion table. Unlisted characters pass through.
const TRANSLATIONS: &[(char, &str)] = &[
    ('Y', "%Y"),
    ('y', "%y"),
    ('m', "%m"),
    ('d', "%d"),
    ('H', "%H"),
    ('i', "%M"),
    ('s', "%S"),
    ('w', "%w"),
    ('W', "%W"),
    ('z', "%j"),
    ('a', "%p"),
    ('A', "%P"),
    ('g', "%l"),
    ('G', "%k"),
    ('h', "%I"),
    ('I', "%l"),
    ('L', "%L"),
    ('u', "%s"),
    ('v', "%3N"),
    ('e', "%Z"),
    ('O', "%z"),
    ('P', "%:z"),
    ('T', "%Z"),
    ('c', "%Y-%m-%dT%H:%M:%S%:z"),
    ('r', "%a, %d %b %Y %T %z"),
    ('U', "%s"),
];

/// Translate a compact format string, character by character.
pub fn translate(format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    for c in format.chars() {
        match TRANSLATIONS.iter().find(|(letter, _)| *letter == c) {
            Some((_, conversion)) => out.push_str(conversion),
            None => out.push(c),
        }
    }
    out
}

/// Build the `+"..."` argument for `date` in the requested syntax.
pub fn format_argument(format: &str, kind: DateFormat) -> String {
    let format = match kind {
        DateFormat::Native => format.to_string(),
        DateFormat::Compact => translate(format),
    };
    format!("+\"{}\"", format)
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
