//! Variable, environment and process specs
//!
//! Verify assignments, exports, command substitution, traps and shell
//! options under a real shell.

use crate::prelude::*;

#[test]
fn quoted_assignment_keeps_spaces() {
    let mut script = Script::new();
    script
        .set("msg", "hello   world")
        .unwrap()
        .echo("\"$msg\"")
        .unwrap();

    run(&script).passes().stdout_eq("hello   world");
}

#[test]
fn nested_script_becomes_command_substitution() {
    let mut inner = Script::new();
    inner.echo("inner").unwrap();

    let mut script = Script::new();
    script.set("sub", &inner).unwrap().echo("$sub").unwrap();

    assert_eq!(script.generate(), "sub=`echo -n inner`\necho -n $sub");
    run(&script).passes().stdout_eq("inner");
}

#[test]
fn export_reaches_child_processes() {
    let mut script = Script::new();
    script
        .export("PSH_VAR", "exported")
        .unwrap()
        .command("sh", ["-c", "'echo -n $PSH_VAR'"])
        .unwrap();

    run(&script).passes().stdout_eq("exported");
}

#[test]
fn command_env_applies_to_one_command() {
    let mut script = Script::new();
    script
        .command_with_env("PSH_ONE=1", "sh", ["-c", "'echo -n $PSH_ONE'"])
        .unwrap()
        .echo("[$PSH_ONE]")
        .unwrap();

    run(&script).passes().stdout_eq("1[]");
}

#[test]
fn trap_runs_on_signal() {
    let mut script = Script::new();
    script
        .trap("echo -n trapped", [Signal::SIGTERM])
        .unwrap()
        .kill("$$", Signal::SIGTERM)
        .unwrap()
        .echo("after")
        .unwrap();

    run(&script).passes().stdout_eq("trappedafter");
}

#[test]
fn trap_action_expands_when_fired() {
    let mut script = Script::new();
    script
        .trap("echo -n \"[$v]\"", [Signal::SIGTERM])
        .unwrap()
        .set("v", "late")
        .unwrap()
        .kill("$$", Signal::SIGTERM)
        .unwrap();

    assert!(script.generate().starts_with(r#"trap "echo -n \"[\$v]\"" 15"#));
    run(&script).passes().stdout_eq("[late]");
}

#[test]
fn errexit_stops_at_first_failure() {
    let mut script = Script::new();
    script
        .shebang_default()
        .unwrap()
        .set_option("e")
        .unwrap()
        .echo("before")
        .unwrap()
        .command("false", Args::new())
        .unwrap()
        .echo("unreachable")
        .unwrap();

    run(&script).fails().stdout_eq("before");
}

#[test]
fn unset_clears_variable() {
    let mut script = Script::new();
    script
        .set("v", 1)
        .unwrap()
        .unset("$v")
        .unwrap()
        .echo("[$v]")
        .unwrap();

    run(&script).passes().stdout_eq("[]");
}

#[test]
fn date_prints_year() {
    let mut script = Script::new();
    script
        .date("Y", psh_core::DateFormat::Compact)
        .unwrap()
        .sleep(0)
        .unwrap();

    let out = run(&script).passes().stdout();
    let year = out.trim();
    assert_eq!(year.len(), 4, "unexpected date output: {:?}", out);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
}
