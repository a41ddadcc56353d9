// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Convenience wrappers for common commands.
//!
//! Each helper validates its input and then goes through
//! [`Script::command`], so its output is always identical to the
//! equivalent hand-written `command` call.

use psh_core::{date, quote, DateFormat, Signal};

use super::{require, BuildResult, Script};
use crate::args::{Args, Value};
use crate::ScriptError;

/// Unit counted by `head`/`tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountMode {
    /// `-n`
    #[default]
    Lines,
    /// `-c`; requires an amount.
    Chars,
}

impl Script {
    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// `echo -n text` (no trailing newline).
    pub fn echo(&mut self, text: &str) -> BuildResult<'_> {
        self.command("echo", ["-n", text])
    }

    /// `echo text`
    pub fn echo_line(&mut self, text: &str) -> BuildResult<'_> {
        self.command("echo", [text])
    }

    /// `printf "format" "arg1" "arg2"`
    pub fn printf(&mut self, format: &str, args: impl Into<Args>) -> BuildResult<'_> {
        let args: Args = args.into();
        let mut quoted = Args::from(quote::double_quote(format));
        for arg in args.as_slice() {
            quoted.push(quote::double_quote(arg));
        }
        self.command("printf", quoted)
    }

    /// `date +"format"`
    pub fn date(&mut self, format: &str, kind: DateFormat) -> BuildResult<'_> {
        self.command("date", [date::format_argument(format, kind)])
    }

    // -------------------------------------------------------------------------
    // Flow
    // -------------------------------------------------------------------------

    /// `sleep N`. Accepts numbers and numeric text; fractions are truncated.
    pub fn sleep(&mut self, seconds: impl Into<Value>) -> BuildResult<'_> {
        let seconds = match seconds.into() {
            Value::Number(n) => n,
            Value::Text(text) if quote::is_numeric(&text) => {
                let parsed: f64 = text.trim().parse().map_err(|_| non_numeric(&text))?;
                parsed.trunc() as i64
            }
            other => return Err(non_numeric(&other.render_raw())),
        };
        self.command("sleep", [seconds])
    }

    /// `break` or `break N`
    pub fn break_(&mut self, levels: Option<u32>) -> BuildResult<'_> {
        self.command("break", Args::from(levels.into_iter().collect::<Vec<_>>()))
    }

    /// `continue` or `continue N`
    pub fn continue_(&mut self, levels: Option<u32>) -> BuildResult<'_> {
        self.command("continue", Args::from(levels.into_iter().collect::<Vec<_>>()))
    }

    /// `exit code`
    pub fn exit(&mut self, code: i32) -> BuildResult<'_> {
        self.command("exit", [code])
    }

    // -------------------------------------------------------------------------
    // Shell state
    // -------------------------------------------------------------------------

    /// `set -option`; the leading dash is optional (`"e"` or `"-e"`).
    pub fn set_option(&mut self, option: &str) -> BuildResult<'_> {
        let option = option.trim_start_matches('-');
        let option = require("option", option)?;
        self.command("set", [format!("-{}", option)])
    }

    /// `unset var`; a leading `$` is dropped.
    pub fn unset(&mut self, variable: &str) -> BuildResult<'_> {
        let variable = variable.strip_prefix('$').unwrap_or(variable);
        let variable = require("variable", variable)?;
        self.command("unset", [variable])
    }

    /// `. file` (POSIX spelling of `source`).
    pub fn source(&mut self, file: &str) -> BuildResult<'_> {
        let file = require("file", file)?;
        self.command(".", [file])
    }

    // -------------------------------------------------------------------------
    // Processes
    // -------------------------------------------------------------------------

    /// `kill -N pid...`
    pub fn kill(&mut self, pids: impl Into<Args>, signal: Signal) -> BuildResult<'_> {
        let pids = pids.into();
        if pids.is_blank() {
            return Err(ScriptError::MissingArgument { argument: "pid" });
        }
        let option = format!("-{}", signal.number());
        self.command("kill", pids.with_options(&[option.as_str()]))
    }

    /// `trap "action" N...`; `action` may be a nested script.
    ///
    /// The action is escaped for double quotes, so variables and command
    /// substitutions in it expand when the trap fires, not when it is set.
    pub fn trap(
        &mut self,
        action: impl Into<Value>,
        signals: impl IntoIterator<Item = Signal>,
    ) -> BuildResult<'_> {
        let numbers: Vec<i32> = signals.into_iter().map(Signal::number).collect();
        if numbers.is_empty() {
            return Err(ScriptError::MissingArgument { argument: "signal" });
        }
        let action = quote::escape_double_quoted(&action.into().render_raw());
        let mut args = Args::from(quote::double_quote(&action));
        for number in numbers {
            args.push(number.to_string());
        }
        self.command("trap", args)
    }

    // -------------------------------------------------------------------------
    // Filesystem
    // -------------------------------------------------------------------------

    /// `mkdir [-p] directory`
    pub fn mkdir(&mut self, directory: &str, recursive: bool) -> BuildResult<'_> {
        let directory = require("directory", directory)?;
        let options: &[&str] = if recursive { &["-p"] } else { &[] };
        self.command("mkdir", Args::from(directory).with_options(options))
    }

    /// `chmod [-R] mode file...`
    pub fn chmod(
        &mut self,
        mode: impl ToString,
        files: impl Into<Args>,
        recursive: bool,
    ) -> BuildResult<'_> {
        let mode = mode.to_string();
        self.change_attribute("chmod", "mode", &mode, files.into(), recursive)
    }

    /// `chown [-R] owner file...`
    pub fn chown(&mut self, owner: &str, files: impl Into<Args>, recursive: bool) -> BuildResult<'_> {
        self.change_attribute("chown", "owner", owner, files.into(), recursive)
    }

    /// `rm [-r] [-f] path...`
    pub fn rm(&mut self, paths: impl Into<Args>, recursive: bool, force: bool) -> BuildResult<'_> {
        let paths = paths.into();
        if paths.is_blank() {
            return Err(ScriptError::MissingArgument { argument: "path" });
        }
        let mut options = Vec::new();
        if recursive {
            options.push("-r");
        }
        if force {
            options.push("-f");
        }
        self.command("rm", paths.with_options(&options))
    }

    /// `cd directory`
    pub fn chdir(&mut self, directory: &str) -> BuildResult<'_> {
        let directory = require("directory", directory)?;
        self.command("cd", [directory])
    }

    /// `touch file`
    pub fn touch(&mut self, file: &str) -> BuildResult<'_> {
        let file = require("file", file)?;
        self.command("touch", [file])
    }

    /// `dirname path`
    pub fn dirname(&mut self, path: &str) -> BuildResult<'_> {
        let path = require("path", path)?;
        self.command("dirname", [path])
    }

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    /// `cat [file]`
    pub fn cat(&mut self, file: Option<&str>) -> BuildResult<'_> {
        self.command("cat", optional_file(file))
    }

    /// `tac [file]`
    pub fn tac(&mut self, file: Option<&str>) -> BuildResult<'_> {
        self.command("tac", optional_file(file))
    }

    /// `head [-nN|-cN] [file]`. A file of `None`, `""` or `"-"` reads stdin.
    pub fn head(&mut self, file: Option<&str>, amount: Option<u64>, mode: CountMode) -> BuildResult<'_> {
        let args = count_args(file, amount, mode)?;
        self.command("head", args)
    }

    /// `tail [-nN|-cN] [file]`. A file of `None`, `""` or `"-"` reads stdin.
    pub fn tail(&mut self, file: Option<&str>, amount: Option<u64>, mode: CountMode) -> BuildResult<'_> {
        let args = count_args(file, amount, mode)?;
        self.command("tail", args)
    }

    fn change_attribute(
        &mut self,
        command: &str,
        argument: &'static str,
        value: &str,
        files: Args,
        recursive: bool,
    ) -> BuildResult<'_> {
        let value = require(argument, value)?;
        if files.is_blank() {
            return Err(ScriptError::MissingArgument { argument: "file" });
        }
        let options: &[&str] = if recursive { &["-R", value] } else { &[value] };
        self.command(command, files.with_options(options))
    }
}

fn non_numeric(value: &str) -> ScriptError {
    ScriptError::NonNumericValue {
        argument: "seconds",
        value: value.to_string(),
    }
}

fn optional_file(file: Option<&str>) -> Args {
    match file {
        Some(f) if !f.trim().is_empty() && f != "-" => Args::from(f),
        _ => Args::new(),
    }
}

fn count_args(file: Option<&str>, amount: Option<u64>, mode: CountMode) -> Result<Args, ScriptError> {
    let option = match (mode, amount) {
        (CountMode::Chars, None) => {
            return Err(ScriptError::MissingArgument { argument: "amount" })
        }
        (CountMode::Chars, Some(n)) => Some(format!("-c{}", n)),
        (CountMode::Lines, Some(n)) => Some(format!("-n{}", n)),
        (CountMode::Lines, None) => None,
    };
    let mut args = Args::new();
    if let Some(option) = option {
        args.push(option);
    }
    for file in optional_file(file).as_slice() {
        args.push(file.clone());
    }
    Ok(args)
}
