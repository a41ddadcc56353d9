//! Conditional specs
//!
//! Verify if/elif/else chains, `case` blocks and file tests pick the
//! expected branch.

use crate::prelude::*;

fn classify(x: i64) -> Script {
    let mut script = Script::new();
    script
        .set("x", x)
        .unwrap()
        .if_(Condition::new().is("x").equals(1), |b| {
            b.echo("one")?;
            Ok(())
        })
        .unwrap()
        .elif(Condition::new().is("x").equals(2), |b| {
            b.echo("OK")?;
            Ok(())
        })
        .unwrap()
        .else_(|b| {
            b.echo("other")?;
            Ok(())
        })
        .unwrap();
    script
}

#[test]
fn elif_branch_is_taken() {
    run(&classify(2)).passes().stdout_eq("OK");
}

#[test]
fn if_branch_is_taken() {
    run(&classify(1)).passes().stdout_eq("one");
}

#[test]
fn else_branch_is_taken() {
    run(&classify(9)).passes().stdout_eq("other");
}

#[test]
fn negated_and_combined_conditions() {
    let mut script = Script::new();
    script
        .set("a", 3)
        .unwrap()
        .if_(
            Condition::new()
                .is("a")
                .not_less_than(3)
                .and()
                .not()
                .is("a")
                .greater_than(5),
            |b| {
                b.echo("in range")?;
                Ok(())
            },
        )
        .unwrap()
        .fi()
        .unwrap();

    run(&script).passes().stdout_eq("in range");
}

#[test]
fn isset_detects_unset_variable() {
    let mut script = Script::new();
    script
        .unset("maybe")
        .unwrap()
        .if_(Condition::new().isset("maybe"), |b| {
            b.echo("unset")?;
            Ok(())
        })
        .unwrap()
        .fi()
        .unwrap();

    run(&script).passes().stdout_eq("unset");
}

fn presence(set: bool) -> Script {
    let mut script = Script::new();
    if set {
        script.set("u", "").unwrap();
    } else {
        script.unset("u").unwrap();
    }
    script
        .if_(
            Condition::new().isset("u").and().token("1").equals(1),
            |b| {
                b.echo("unset")?;
                Ok(())
            },
        )
        .unwrap()
        .else_(|b| {
            b.echo("set")?;
            Ok(())
        })
        .unwrap();
    script
}

#[test]
fn isset_combines_with_other_tests() {
    run(&presence(false)).passes().stdout_eq("unset");
}

#[test]
fn isset_sees_variable_set_to_empty() {
    run(&presence(true)).passes().stdout_eq("set");
}

#[test]
fn empty_checks_survive_unset_operands() {
    let mut script = Script::new();
    script
        .unset("blank")
        .unwrap()
        .if_(
            Condition::new().is_empty("blank").and().not().is_not_empty("blank"),
            |b| {
                b.echo("empty")?;
                Ok(())
            },
        )
        .unwrap()
        .fi()
        .unwrap();

    run(&script).passes().stdout_eq("empty");
}

#[test]
fn empty_bodies_still_run() {
    let mut script = Script::new();
    script
        .if_("1 -eq 1", |_| Ok(()))
        .unwrap()
        .else_(|_| Ok(()))
        .unwrap()
        .while_("1 -eq 0", |_| Ok(()))
        .unwrap()
        .echo("done")
        .unwrap();

    assert_eq!(
        script.generate(),
        "if [ 1 -eq 1 ]; then\n\t:\nelse\n\t:\nfi\nwhile [ 1 -eq 0 ]; do\n\t:\ndone\necho -n done"
    );
    run(&script).passes().stdout_eq("done");
}

#[test]
fn switch_matches_alternatives() {
    let mut script = Script::new();
    script
        .set("answer", "yes")
        .unwrap()
        .switch("answer", |sw| {
            sw.case("y|yes", |c| {
                c.echo("matched")?;
                Ok(())
            })?
            .case("*", |c| {
                c.echo("fallback")?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();

    run(&script).passes().stdout_eq("matched");
}

#[test]
fn file_tests_see_workspace_files() {
    let ws = Workspace::empty();
    ws.file("present.txt", "data");

    let mut script = Script::new();
    script
        .if_(Condition::new().file_exists("present.txt"), |b| {
            b.echo("file")?;
            Ok(())
        })
        .unwrap()
        .fi()
        .unwrap()
        .if_(Condition::new().not_empty_file("present.txt"), |b| {
            b.echo("nonempty")?;
            Ok(())
        })
        .unwrap()
        .fi()
        .unwrap()
        .if_(Condition::new().not().path_exists("missing"), |b| {
            b.echo("missing")?;
            Ok(())
        })
        .unwrap()
        .fi()
        .unwrap();

    ws.run(&script).passes().stdout_eq("filenonemptymissing");
}

#[test]
fn exit_code_is_propagated() {
    let mut script = Script::new();
    script
        .if_("1 -eq 1", |b| {
            b.exit(3)?;
            Ok(())
        })
        .unwrap()
        .fi()
        .unwrap();

    run(&script).fails().code_eq(3);
}
