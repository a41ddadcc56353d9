//! Filesystem helper specs
//!
//! Verify mkdir/touch/chmod/rm/cd/source against a temporary workspace.

use crate::prelude::*;

#[test]
fn mkdir_recursive_and_touch() {
    let ws = Workspace::empty();
    let mut script = Script::new();
    script
        .mkdir("a/b/c", true)
        .unwrap()
        .touch("a/b/c/f")
        .unwrap();

    ws.run(&script).passes();
    assert!(ws.exists("a/b/c/f"));
}

#[test]
fn chmod_makes_file_executable() {
    let ws = Workspace::empty();
    ws.file("run.sh", "echo hi\n");
    let mut script = Script::new();
    script
        .chmod("+x", "run.sh", false)
        .unwrap()
        .if_(Condition::new().executable("run.sh"), |b| {
            b.echo("executable")?;
            Ok(())
        })
        .unwrap()
        .fi()
        .unwrap();

    ws.run(&script).passes().stdout_eq("executable");
}

#[test]
fn rm_recursive_force_removes_tree() {
    let ws = Workspace::empty();
    ws.file("tree/a/b.txt", "x");
    let mut script = Script::new();
    script
        .rm("tree", true, true)
        .unwrap()
        .rm("not-there", false, true)
        .unwrap();

    ws.run(&script).passes();
    assert!(!ws.exists("tree"));
}

#[test]
fn chdir_changes_working_directory() {
    let ws = Workspace::empty();
    let mut script = Script::new();
    script
        .mkdir("sub", false)
        .unwrap()
        .chdir("sub")
        .unwrap()
        .touch("inside")
        .unwrap();

    ws.run(&script).passes();
    assert!(ws.exists("sub/inside"));
}

#[test]
fn dirname_strips_last_component() {
    let mut script = Script::new();
    script.dirname("/a/b/c").unwrap();

    run(&script).passes().stdout_eq("/a/b\n");
}

#[test]
fn source_loads_variables() {
    let ws = Workspace::empty();
    ws.file("env.sh", "GREETING=hi\n");
    let mut script = Script::new();
    script
        .source("./env.sh")
        .unwrap()
        .echo("$GREETING")
        .unwrap();

    ws.run(&script).passes().stdout_eq("hi");
}

#[test]
fn directory_test_after_removal() {
    let ws = Workspace::empty();
    let dir = ws.join("gone");
    let mut script = Script::new();
    script
        .mkdir(&dir, false)
        .unwrap()
        .rm(dir.as_str(), true, false)
        .unwrap()
        .if_(Condition::new().not().directory_exists(&dir), |b| {
            b.echo("removed")?;
            Ok(())
        })
        .unwrap()
        .fi()
        .unwrap();

    run(&script).passes().stdout_eq("removed");
}
