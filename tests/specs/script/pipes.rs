//! Pipe, list and redirection specs
//!
//! Verify that connectors keep commands on one shell line and that
//! redirections and escaping behave under a real shell.

use crate::prelude::*;

#[test]
fn echo_piped_into_cat() {
    let mut script = Script::new();
    script.echo("test").unwrap().pipe().unwrap().cat(None).unwrap();

    assert_eq!(script.generate(), "echo -n test | cat");
    run(&script).passes().stdout_eq("test");
}

#[test]
fn or_runs_fallback_after_failure() {
    let mut script = Script::new();
    script
        .command("false", Args::new())
        .unwrap()
        .or()
        .unwrap()
        .echo("recovered")
        .unwrap();

    run(&script).passes().stdout_eq("recovered");
}

#[test]
fn and_skips_after_failure() {
    let mut script = Script::new();
    script
        .command("true", Args::new())
        .unwrap()
        .and()
        .unwrap()
        .echo("a")
        .unwrap()
        .command("false", Args::new())
        .unwrap()
        .and()
        .unwrap()
        .echo("b")
        .unwrap()
        .put("|| true", false)
        .unwrap();

    run(&script).passes().stdout_eq("a");
}

#[test]
fn semicolon_separates_commands_on_one_line() {
    let mut script = Script::new();
    script.echo("a").unwrap().semicolon().unwrap().echo("b").unwrap();

    assert_eq!(script.generate(), "echo -n a; echo -n b");
    run(&script).passes().stdout_eq("ab");
}

#[test]
fn continuation_joins_physical_lines() {
    let mut script = Script::new();
    script
        .command("echo", ["-n", "first"])
        .unwrap()
        .next_line(true)
        .unwrap()
        .command("second", Args::new())
        .unwrap();

    run(&script).passes().stdout_eq("first second");
}

#[test]
fn redirect_writes_file_then_next_command_starts_fresh() {
    let ws = Workspace::empty();
    let mut script = Script::new();
    script
        .echo("x")
        .unwrap()
        .redirect(1, ">", "out.txt")
        .unwrap()
        .echo("y")
        .unwrap()
        .redirect(1, ">>", "out.txt")
        .unwrap()
        .cat(Some("out.txt"))
        .unwrap();

    ws.run(&script).passes().stdout_eq("xy");
    assert_eq!(ws.read("out.txt"), "xy");
}

#[test]
fn stderr_redirect_then_fallback() {
    let mut script = Script::new();
    script
        .command("ls", ["/psh-spec-missing-dir"])
        .unwrap()
        .redirect(2, ">", "/dev/null")
        .unwrap()
        .or()
        .unwrap()
        .echo("quiet")
        .unwrap();

    run(&script).passes().stdout_eq("quiet");
}

#[test]
fn escaped_arguments_stay_literal() {
    let mut script = Script::new();
    script
        .command_escaped("echo", ["hello world", "$HOME", "a;b"])
        .unwrap();

    run(&script).passes().stdout_eq("hello world $HOME a;b\n");
}

#[test]
fn head_and_tail_slice_a_file() {
    let ws = Workspace::empty();
    let mut script = Script::new();
    script
        .printf("%s\\n", ["one", "two", "three"])
        .unwrap()
        .redirect(1, ">", "lines.txt")
        .unwrap()
        .head(Some("lines.txt"), Some(2), CountMode::Lines)
        .unwrap()
        .cat(Some("lines.txt"))
        .unwrap()
        .pipe()
        .unwrap()
        .tail(None, Some(1), CountMode::Lines)
        .unwrap()
        .head(Some("lines.txt"), Some(3), CountMode::Chars)
        .unwrap();

    ws.run(&script).passes().stdout_eq("one\ntwo\nthree\none");
}
