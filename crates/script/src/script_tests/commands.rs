// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Convenience commands. Each helper must produce exactly what the
//! equivalent `command` call would.

use super::{build, build_err};
use crate::{Args, CountMode, DateFormat, Script, ScriptError, Signal};

#[yare::parameterized(
    echo          = { build(|s| s.echo("x")),                        "echo -n x" },
    echo_line     = { build(|s| s.echo_line("x")),                   "echo x" },
    printf        = { build(|s| s.printf("%s-%s", ["a", "b"])),      "printf \"%s-%s\" \"a\" \"b\"" },
    sleep_int     = { build(|s| s.sleep(5)),                         "sleep 5" },
    sleep_text    = { build(|s| s.sleep("10")),                      "sleep 10" },
    sleep_frac    = { build(|s| s.sleep("2.7")),                     "sleep 2" },
    break_plain   = { build(|s| s.break_(None)),                     "break" },
    break_levels  = { build(|s| s.break_(Some(2))),                  "break 2" },
    continue_     = { build(|s| s.continue_(Some(1))),               "continue 1" },
    exit          = { build(|s| s.exit(3)),                          "exit 3" },
    set_option    = { build(|s| s.set_option("e")),                  "set -e" },
    set_dashed    = { build(|s| s.set_option("-u")),                 "set -u" },
    unset         = { build(|s| s.unset("$tmp")),                    "unset tmp" },
    source        = { build(|s| s.source("./env.sh")),               ". ./env.sh" },
    mkdir         = { build(|s| s.mkdir("/tmp/a", false)),           "mkdir /tmp/a" },
    mkdir_p       = { build(|s| s.mkdir("/tmp/a/b", true)),          "mkdir -p /tmp/a/b" },
    chmod         = { build(|s| s.chmod(755, "run.sh", false)),      "chmod 755 run.sh" },
    chmod_r       = { build(|s| s.chmod("+x", ["a", "b"], true)),    "chmod -R +x a b" },
    chown         = { build(|s| s.chown("root:root", "/srv", true)), "chown -R root:root /srv" },
    rm            = { build(|s| s.rm(["a", "b"], false, false)),     "rm a b" },
    rm_rf         = { build(|s| s.rm("/tmp/build", true, true)),     "rm -r -f /tmp/build" },
    chdir         = { build(|s| s.chdir("/tmp")),                    "cd /tmp" },
    touch         = { build(|s| s.touch("stamp")),                   "touch stamp" },
    dirname       = { build(|s| s.dirname("/a/b/c")),                "dirname /a/b/c" },
    cat_file      = { build(|s| s.cat(Some("f.txt"))),               "cat f.txt" },
    cat_stdin     = { build(|s| s.cat(Some("-"))),                   "cat" },
    tac           = { build(|s| s.tac(None)),                        "tac" },
    head_lines    = { build(|s| s.head(Some("log"), Some(5), CountMode::Lines)), "head -n5 log" },
    head_plain    = { build(|s| s.head(Some(""), None, CountMode::Lines)),      "head" },
    tail_chars    = { build(|s| s.tail(None, Some(10), CountMode::Chars)),      "tail -c10" },
    kill          = { build(|s| s.kill([1, 2], Signal::SIGTERM)),    "kill -15 1 2" },
    kill_one      = { build(|s| s.kill("$pid", Signal::SIGKILL)),    "kill -9 $pid" },
    trap          = { build(|s| s.trap("rm -f /tmp/lock", [Signal::SIGINT, Signal::SIGTERM])), "trap \"rm -f /tmp/lock\" 2 15" },
    date_native   = { build(|s| s.date("%Y-%m-%d", DateFormat::Native)),  "date +\"%Y-%m-%d\"" },
    date_compact  = { build(|s| s.date("Y-m-d H:i", DateFormat::Compact)), "date +\"%Y-%m-%d %H:%M\"" },
)]
fn helper_output(actual: String, expected: &str) {
    assert_eq!(actual, expected);
}

#[test]
fn helpers_match_plain_command_calls() {
    let mut helpers = Script::new();
    helpers
        .rm("/tmp/x", true, true)
        .unwrap()
        .kill("42", Signal::SIGHUP)
        .unwrap()
        .head(Some("f"), Some(3), CountMode::Lines)
        .unwrap();

    let mut manual = Script::new();
    manual
        .command("rm", ["-r", "-f", "/tmp/x"])
        .unwrap()
        .command("kill", ["-1", "42"])
        .unwrap()
        .command("head", ["-n3", "f"])
        .unwrap();

    assert_eq!(helpers.generate(), manual.generate());
}

#[test]
fn helpers_join_an_open_line() {
    let out = build(|s| s.cat(Some("access.log"))?.pipe()?.tail(None, Some(20), CountMode::Lines));
    assert_eq!(out, "cat access.log | tail -n20");
}

#[test]
fn trap_with_nested_script_action() {
    let mut cleanup = Script::new();
    cleanup.rm("/tmp/lock", false, true).unwrap();
    let out = build(|s| s.trap(&cleanup, [Signal::SIGTERM]));
    assert_eq!(out, "trap \"rm -f /tmp/lock\" 15");
}

#[test]
fn trap_action_is_escaped_for_double_quotes() {
    let mut cleanup = Script::new();
    cleanup.echo_line("\"bye $USER\"").unwrap();
    let out = build(|s| s.trap(&cleanup, [Signal::SIGTERM]));
    assert_eq!(out, r#"trap "echo \"bye \$USER\"" 15"#);
}

// =============================================================================
// validation
// =============================================================================

#[yare::parameterized(
    sleep_word    = { |s: &mut Script| s.sleep("soon").map(|_| ()) },
    sleep_empty   = { |s: &mut Script| s.sleep("").map(|_| ()) },
)]
fn sleep_rejects_non_numeric(op: fn(&mut Script) -> Result<(), ScriptError>) {
    let mut script = Script::new();
    assert!(matches!(
        op(&mut script),
        Err(ScriptError::NonNumericValue { argument: "seconds", .. })
    ));
    assert!(script.is_empty());
}

#[test]
fn sleep_rejects_nested_script() {
    let mut inner = Script::new();
    inner.echo("1").unwrap();
    let err = build_err("", |s| s.sleep(inner));
    assert!(matches!(err, ScriptError::NonNumericValue { .. }));
}

#[yare::parameterized(
    kill_no_pid    = { "pid",       |s: &mut Script| s.kill(Args::new(), Signal::SIGTERM).map(|_| ()) },
    trap_no_signal = { "signal",    |s: &mut Script| s.trap("true", Vec::<Signal>::new()).map(|_| ()) },
    tail_chars     = { "amount",    |s: &mut Script| s.tail(Some("f"), None, CountMode::Chars).map(|_| ()) },
    touch          = { "file",      |s: &mut Script| s.touch("").map(|_| ()) },
    rm             = { "path",      |s: &mut Script| s.rm(Args::new(), true, false).map(|_| ()) },
    chmod_mode     = { "mode",      |s: &mut Script| s.chmod("", "f", false).map(|_| ()) },
    chown_files    = { "file",      |s: &mut Script| s.chown("root", Args::new(), false).map(|_| ()) },
    mkdir          = { "directory", |s: &mut Script| s.mkdir(" ", true).map(|_| ()) },
    unset          = { "variable",  |s: &mut Script| s.unset("$").map(|_| ()) },
    set_option     = { "option",    |s: &mut Script| s.set_option("-").map(|_| ()) },
)]
fn missing_arguments(argument: &'static str, op: fn(&mut Script) -> Result<(), ScriptError>) {
    let mut script = Script::new();
    script.echo_line("keep").unwrap();
    let before = script.clone();
    assert_eq!(
        op(&mut script),
        Err(ScriptError::MissingArgument { argument })
    );
    assert_eq!(script, before);
}
