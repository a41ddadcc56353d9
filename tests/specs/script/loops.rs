//! Loop specs
//!
//! Verify `while` loops with counters, `break` and `continue` run as written.

use crate::prelude::*;

#[test]
fn while_counts_to_ten() {
    let mut script = Script::new();
    script
        .set("i", 0)
        .unwrap()
        .while_(Condition::new().is("i").less_than(10), |body| {
            body.echo("$i")?.increment("i", 1)?;
            Ok(())
        })
        .unwrap();

    run(&script).passes().stdout_eq("0123456789");
}

#[test]
fn break_and_continue_skip_iterations() {
    let mut script = Script::new();
    script
        .set("i", 0)
        .unwrap()
        .while_(Condition::new().is("i").less_than(10), |body| {
            body.increment("i", 1)?
                .if_(Condition::new().is("i").less_than(5), |skip| {
                    skip.continue_(None)?;
                    Ok(())
                })?
                .fi()?
                .if_(Condition::new().is("i").greater_than(7), |stop| {
                    stop.break_(None)?;
                    Ok(())
                })?
                .fi()?
                .echo("$i")?;
            Ok(())
        })
        .unwrap();

    run(&script).passes().stdout_eq("567");
}

#[test]
fn nested_loops_break_outer_level() {
    let mut script = Script::new();
    script
        .set("i", 0)
        .unwrap()
        .while_(Condition::new().is("i").less_than(3), |outer| {
            outer
                .increment("i", 1)?
                .set("j", 0)?
                .while_(Condition::new().is("j").less_than(3), |inner| {
                    inner
                        .increment("j", 1)?
                        .if_(Condition::new().is("i").equals(2), |stop| {
                            stop.break_(Some(2))?;
                            Ok(())
                        })?
                        .fi()?
                        .echo("$i$j")?;
                    Ok(())
                })?;
            Ok(())
        })
        .unwrap();

    run(&script).passes().stdout_eq("111213");
}

#[test]
fn decrement_counts_down() {
    let mut script = Script::new();
    script
        .set("n", 3)
        .unwrap()
        .while_(Condition::new().is("n").greater_than(0), |body| {
            body.echo("$n")?.decrement("n", 1)?;
            Ok(())
        })
        .unwrap();

    run(&script).passes().stdout_eq("321");
}
