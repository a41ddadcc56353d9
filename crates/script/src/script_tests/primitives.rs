// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands, connectors, variables and script structure.

use super::{build, build_err};
use crate::{Args, Indent, LineEnding, RenderConfig, Script, ScriptError};

// =============================================================================
// command / connectors
// =============================================================================

#[test]
fn command_joins_name_and_args() {
    assert_eq!(build(|s| s.command("ls", ["-la", "/tmp"])), "ls -la /tmp");
    assert_eq!(build(|s| s.command("pwd", Args::new())), "pwd");
}

#[test]
fn empty_name_writes_raw_line() {
    assert_eq!(build(|s| s.command("", ["x=1"])), "x=1");
}

#[test]
fn pipe_keeps_commands_on_one_line() {
    let out = build(|s| s.echo("test")?.pipe()?.cat(None));
    assert_eq!(out, "echo -n test | cat");
}

#[test]
fn command_after_closed_line_starts_new_line() {
    let out = build(|s| s.echo("a")?.echo("b"));
    assert_eq!(out, "echo -n a\necho -n b");
}

#[test]
fn semicolon_attaches_without_space() {
    let out = build(|s| s.chdir("/tmp")?.semicolon()?.command("ls", Args::new()));
    assert_eq!(out, "cd /tmp; ls");
}

#[test]
fn and_or_chain() {
    let out = build(|s| {
        s.command("make", Args::new())?
            .and()?
            .command("make", ["install"])?
            .or()?
            .echo_line("failed")
    });
    assert_eq!(out, "make && make install || echo failed");
}

#[yare::parameterized(
    plain    = { false, "apt-get install \\\ncurl" },
    with_tab = { true,  "apt-get install \\\n\tcurl" },
)]
fn next_line_continues_command(with_tab: bool, expected: &str) {
    let out = build(|s| {
        s.command("apt-get", ["install"])?
            .next_line(with_tab)?
            .command("curl", Args::new())
    });
    assert_eq!(out, expected);
}

#[test]
fn put_on_empty_script_when_allowed() {
    assert_eq!(build(|s| s.put("tail -f log", true)), "tail -f log");
}

#[yare::parameterized(
    pipe      = { |s: &mut Script| s.pipe().map(|_| ()) },
    and       = { |s: &mut Script| s.and().map(|_| ()) },
    or        = { |s: &mut Script| s.or().map(|_| ()) },
    semicolon = { |s: &mut Script| s.semicolon().map(|_| ()) },
    redirect  = { |s: &mut Script| s.redirect(1, ">", "/dev/null").map(|_| ()) },
    put       = { |s: &mut Script| s.put("x", false).map(|_| ()) },
)]
fn connectors_fail_on_empty_script(op: fn(&mut Script) -> Result<(), ScriptError>) {
    let mut script = Script::new();
    assert_eq!(op(&mut script), Err(ScriptError::EmptyLine));
    assert!(script.is_empty());
}

// =============================================================================
// redirect
// =============================================================================

#[test]
fn redirect_appends_then_closes_line() {
    let out = build(|s| s.echo("x")?.redirect(1, ">>", "/tmp/out")?.echo("y"));
    assert_eq!(out, "echo -n x 1>> /tmp/out\necho -n y");
}

#[yare::parameterized(
    dup_out = { 2, ">&", "1", "cmd 2>& 1" },
    read    = { 0, "<", "in.txt", "cmd 0< in.txt" },
    close   = { 3, ">&-", "", "cmd 3>&-" },
)]
fn redirect_operators(fd: u32, op: &str, dst: &str, expected: &str) {
    let out = build(|s| s.command("cmd", Args::new())?.redirect(fd, op, dst));
    assert_eq!(out, expected);
}

#[test]
fn redirect_rejects_unknown_operator() {
    let err = build_err("echo x", |s| s.redirect(1, "=>", "/tmp/out"));
    assert_eq!(
        err,
        ScriptError::InvalidOperator {
            op: "=>".to_string()
        }
    );
}

// =============================================================================
// variables
// =============================================================================

#[yare::parameterized(
    number    = { "i", crate::Value::from(0), "i=0" },
    decimal   = { "n", crate::Value::from("3.5"), "n=3.5" },
    text      = { "name", crate::Value::from("hello world"), "name=\"hello world\"" },
    backtick  = { "d", crate::Value::from("`date`"), "d=`date`" },
)]
fn set_quotes_by_value_kind(variable: &str, value: crate::Value, expected: &str) {
    assert_eq!(build(|s| s.set(variable, value)), expected);
}

#[test]
fn set_with_nested_script_uses_command_substitution() {
    let mut inner = Script::new();
    inner.command("pwd", Args::new()).unwrap();
    assert_eq!(build(|s| s.set("dir", &inner)), "dir=`pwd`");
}

#[test]
fn export_quotes_like_set() {
    assert_eq!(
        build(|s| s.export("PATH", "/usr/bin")),
        "export PATH=\"/usr/bin\""
    );
}

#[test]
fn increment_and_decrement() {
    let out = build(|s| s.increment("i", 1)?.decrement("j", 2));
    assert_eq!(out, "i=$((i+1))\nj=$((j-2))");
}

#[test]
fn set_requires_variable_name() {
    let err = build_err("", |s| s.set(" ", 1));
    assert_eq!(err, ScriptError::MissingArgument { argument: "variable" });
}

// =============================================================================
// escaping
// =============================================================================

#[test]
fn escaped_command_quotes_whitespace() {
    assert_eq!(
        build(|s| s.command_escaped("echo", ["hello world"])),
        "echo 'hello world'"
    );
}

#[test]
fn escaped_command_leaves_plain_words() {
    assert_eq!(
        build(|s| s.command_escaped("ls", ["-la", "/tmp"])),
        "ls -la /tmp"
    );
}

#[test]
fn escaped_command_rejects_nul_byte() {
    let err = build_err("", |s| s.command_escaped("echo", ["a\0b"]));
    assert!(matches!(err, ScriptError::Escape(_)));
}

#[test]
fn command_with_env_prefixes_assignment() {
    let out = build(|s| {
        s.command_with_env("DEBIAN_FRONTEND=noninteractive", "apt-get", ["update"])
    });
    assert_eq!(out, "DEBIAN_FRONTEND=noninteractive apt-get update");
}

#[test]
fn command_with_blank_env_is_plain_command() {
    let out = build(|s| s.command_with_env("", "apt-get", ["update"]));
    assert_eq!(out, "apt-get update");
}

#[test]
fn command_with_env_escaped() {
    let out = build(|s| s.command_with_env_escaped("LANG=C", "grep", ["a b", "f"]));
    assert_eq!(out, "LANG=C grep 'a b' f");
}

// =============================================================================
// shebang / embed
// =============================================================================

#[test]
fn shebang_with_arguments() {
    assert_eq!(build(|s| s.shebang("/bin/bash", ["-e"])), "#!/bin/bash -e");
}

#[test]
fn shebang_default_uses_configured_interpreter() {
    assert_eq!(build(|s| s.shebang_default()), "#!/bin/sh");

    let config = RenderConfig {
        interpreter: "/usr/bin/env bash".to_string(),
        ..RenderConfig::default()
    };
    let mut script = Script::with_config(config);
    script.shebang_default().unwrap();
    assert_eq!(script.generate(), "#!/usr/bin/env bash");
}

#[test]
fn shebang_after_content_is_rejected() {
    let err = build_err("echo x", |s| s.shebang_default());
    assert_eq!(err, ScriptError::Ordering { operation: "shebang" });
}

#[test]
fn shebang_inside_nested_block_is_rejected() {
    let err = build_err("", |s| {
        s.while_("1", |body| {
            body.shebang_default()?;
            Ok(())
        })
    });
    assert_eq!(err, ScriptError::Ordering { operation: "shebang" });
}

#[test]
fn embed_reindents_to_depth() {
    let mut other = Script::new();
    other.echo_line("a").unwrap().echo_line("b").unwrap();

    assert_eq!(build(|s| s.embed(&other)), "echo a\necho b");
    let out = build(|s| {
        s.while_("1", |body| {
            body.embed(&other)?;
            Ok(())
        })
    });
    assert_eq!(out, "while [ 1 ]; do\n\techo a\n\techo b\ndone");
}

#[test]
fn embed_empty_script_is_noop() {
    assert_eq!(build(|s| s.embed(&Script::new())), "");
}

// =============================================================================
// rendering
// =============================================================================

#[test]
fn config_controls_indent_and_line_ending() {
    let config = RenderConfig {
        indent: Indent::Spaces(2),
        line_ending: LineEnding::Crlf,
        ..RenderConfig::default()
    };
    let mut script = Script::with_config(config);
    script
        .while_("1", |body| {
            body.echo("x")?;
            Ok(())
        })
        .unwrap();
    assert_eq!(script.generate(), "while [ 1 ]; do\r\n  echo -n x\r\ndone");
}

#[test]
fn generate_is_idempotent_and_matches_display() {
    let mut script = Script::new();
    script.echo("a").unwrap().pipe().unwrap();
    let first = script.generate();
    assert_eq!(script.generate(), first);
    assert_eq!(script.to_string(), first);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn helper_output_matches_command(text in "[a-zA-Z0-9_./-]{1,16}") {
            let mut helper = Script::new();
            helper.echo(&text).unwrap();
            let mut manual = Script::new();
            manual.command("echo", ["-n", text.as_str()]).unwrap();
            prop_assert_eq!(helper.generate(), manual.generate());
        }

        #[test]
        fn pipes_never_split_lines(words in proptest::collection::vec("[a-z]{1,6}", 1..6)) {
            let mut script = Script::new();
            script.command(&words[0], Args::new()).unwrap();
            for word in &words[1..] {
                script.pipe().unwrap().command(word, Args::new()).unwrap();
            }
            prop_assert_eq!(script.generate(), words.join(" | "));
        }
    }
}
