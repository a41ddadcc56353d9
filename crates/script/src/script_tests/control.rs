// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! if/elif/else chains, case and while blocks.

use super::{build, build_err, init_tracing};
use crate::{Condition, Script, ScriptError, TestStyle};

fn x_is(n: i64) -> Condition {
    Condition::new().is("x").equals(n)
}

// =============================================================================
// if / elif / else
// =============================================================================

#[test]
fn if_then_fi() {
    let out = build(|s| {
        s.if_(x_is(1), |body| {
            body.echo_line("one")?;
            Ok(())
        })?
        .fi()
    });
    assert_eq!(out, "if [ $x -eq 1 ]; then\n\techo one\nfi");
}

#[test]
fn full_conditional_chain() {
    let out = build(|s| {
        s.if_(x_is(1), |b| {
            b.echo_line("one")?;
            Ok(())
        })?
        .elif(x_is(2), |b| {
            b.echo_line("two")?;
            Ok(())
        })?
        .else_(|b| {
            b.echo_line("other")?;
            Ok(())
        })
    });
    assert_eq!(
        out,
        "if [ $x -eq 1 ]; then\n\techo one\nelif [ $x -eq 2 ]; then\n\techo two\nelse\n\techo other\nfi"
    );
}

#[test]
fn extended_test_style() {
    let out = build(|s| {
        s.if_with(Condition::new().is_dir("/tmp"), TestStyle::Extended, |b| {
            b.echo_line("dir")?;
            Ok(())
        })?
        .endif()
    });
    assert_eq!(out, "if [[ -d /tmp ]]; then\n\techo dir\nfi");
}

#[test]
fn empty_body_emits_null_command() {
    let out = build(|s| s.if_("1", |_| Ok(()))?.fi());
    assert_eq!(out, "if [ 1 ]; then\n\t:\nfi");
}

#[test]
fn empty_elif_and_else_bodies_emit_null_command() {
    let out = build(|s| s.if_("1", |_| Ok(()))?.elif("2", |_| Ok(()))?.else_(|_| Ok(())));
    assert_eq!(out, "if [ 1 ]; then\n\t:\nelif [ 2 ]; then\n\t:\nelse\n\t:\nfi");
}

#[test]
fn empty_nested_body_uses_its_own_depth() {
    let out = build(|s| {
        s.while_("1", |outer| {
            outer.if_("2", |_| Ok(()))?.fi()?;
            Ok(())
        })
    });
    assert_eq!(out, "while [ 1 ]; do\n\tif [ 2 ]; then\n\t\t:\n\tfi\ndone");
}

#[yare::parameterized(
    elif = { |s: &mut Script| s.elif("1", |_| Ok(())).map(|_| ()), "elif without an open if" },
    else_ = { |s: &mut Script| s.else_(|_| Ok(())).map(|_| ()), "else without an open if" },
    fi = { |s: &mut Script| s.fi().map(|_| ()), "fi without an open if" },
)]
fn chain_operations_need_open_if(
    op: fn(&mut Script) -> Result<(), ScriptError>,
    message: &'static str,
) {
    init_tracing();
    let mut script = Script::new();
    script.echo_line("start").unwrap();
    let before = script.clone();
    assert_eq!(op(&mut script), Err(ScriptError::State(message)));
    assert_eq!(script, before);
}

#[test]
fn else_closes_the_chain() {
    let mut script = Script::new();
    script
        .if_("1", |_| Ok(()))
        .unwrap()
        .else_(|_| Ok(()))
        .unwrap();
    assert_eq!(
        script.fi().unwrap_err(),
        ScriptError::State("fi without an open if")
    );
    assert_eq!(script.generate(), "if [ 1 ]; then\n\t:\nelse\n\t:\nfi");
}

#[test]
fn second_fi_is_rejected() {
    let mut script = Script::new();
    script.if_("1", |_| Ok(())).unwrap().fi().unwrap();
    assert!(matches!(script.fi(), Err(ScriptError::State(_))));
}

#[test]
fn sibling_chains_are_independent() {
    let out = build(|s| s.if_("1", |_| Ok(()))?.if_("2", |_| Ok(()))?.fi()?.fi());
    assert_eq!(out, "if [ 1 ]; then\n\t:\nif [ 2 ]; then\n\t:\nfi\nfi");
}

#[test]
fn body_with_open_if_is_rejected() {
    init_tracing();
    let err = build_err("echo before", |s| {
        s.while_("1", |body| {
            body.if_("2", |inner| {
                inner.echo_line("x")?;
                Ok(())
            })?;
            Ok(())
        })
    });
    assert_eq!(err, ScriptError::State("nested block left an if chain open"));
}

#[test]
fn body_closing_its_own_chain_is_accepted() {
    let out = build(|s| {
        s.if_("1", |body| {
            body.if_("2", |inner| {
                inner.echo_line("x")?;
                Ok(())
            })?
            .fi()?;
            Ok(())
        })?
        .fi()
    });
    assert_eq!(out, "if [ 1 ]; then\n\tif [ 2 ]; then\n\t\techo x\n\tfi\nfi");
}

// =============================================================================
// nesting
// =============================================================================

#[test]
fn nested_blocks_indent_per_level() {
    init_tracing();
    let out = build(|s| {
        s.while_("1", |outer| {
            outer
                .if_("2", |inner| {
                    inner.echo_line("deep")?.break_(None)?;
                    Ok(())
                })?
                .fi()?;
            Ok(())
        })
    });
    assert_eq!(
        out,
        "while [ 1 ]; do\n\tif [ 2 ]; then\n\t\techo deep\n\t\tbreak\n\tfi\ndone"
    );
}

#[test]
fn three_levels_deep() {
    let out = build(|s| {
        s.while_("a", |one| {
            one.while_("b", |two| {
                two.while_("c", |three| {
                    three.echo_line("x")?;
                    Ok(())
                })?;
                Ok(())
            })?;
            Ok(())
        })
    });
    assert_eq!(
        out,
        "while [ a ]; do\n\twhile [ b ]; do\n\t\twhile [ c ]; do\n\t\t\techo x\n\t\tdone\n\tdone\ndone"
    );
}

#[test]
fn failing_body_leaves_parent_untouched() {
    init_tracing();
    let err = build_err("echo before", |s| {
        s.while_("1", |body| {
            body.echo_line("a")?.put("|", false)?;
            body.redirect(1, "=>", "x")?;
            Ok(())
        })
    });
    assert!(matches!(err, ScriptError::InvalidOperator { .. }));
}

#[test]
fn body_sees_parent_config() {
    let config = crate::RenderConfig {
        indent: crate::Indent::Spaces(4),
        ..crate::RenderConfig::default()
    };
    let mut script = Script::with_config(config.clone());
    script
        .while_("1", |body| {
            assert_eq!(body.config(), &config);
            assert_eq!(body.depth(), 1);
            body.echo_line("x")?;
            Ok(())
        })
        .unwrap();
    assert_eq!(script.generate(), "while [ 1 ]; do\n    echo x\ndone");
}

// =============================================================================
// switch / case
// =============================================================================

#[test]
fn switch_with_cases() {
    let out = build(|s| {
        s.switch("$answer", |sw| {
            sw.case("y|yes", |c| {
                c.echo_line("ok")?;
                Ok(())
            })?
            .case("*", |c| {
                c.exit(1)?;
                Ok(())
            })?;
            Ok(())
        })
    });
    assert_eq!(
        out,
        "case $answer in\n\ty|yes)\n\t\techo ok\n\t;;\n\t*)\n\t\texit 1\n\t;;\nesac"
    );
}

#[test]
fn empty_case_arm_stays_empty() {
    let out = build(|s| {
        s.switch("x", |sw| {
            sw.case("*", |_| Ok(()))?;
            Ok(())
        })
    });
    assert_eq!(out, "case $x in\n\t*)\n\t;;\nesac");
}

#[test]
fn switch_requires_variable() {
    let err = build_err("", |s| s.switch("$", |_| Ok(())));
    assert_eq!(err, ScriptError::MissingArgument { argument: "variable" });
}

#[test]
fn case_requires_pattern() {
    let err = build_err("", |s| s.case(" ", |_| Ok(())));
    assert_eq!(err, ScriptError::MissingArgument { argument: "pattern" });
}

// =============================================================================
// while
// =============================================================================

#[test]
fn while_loop_with_counter() {
    let out = build(|s| {
        s.set("i", 0)?
            .while_(Condition::new().is("i").less_than(10), |b| {
                b.echo("$i")?.increment("i", 1)?;
                Ok(())
            })
    });
    assert_eq!(
        out,
        "i=0\nwhile [ $i -lt 10 ]; do\n\techo -n $i\n\ti=$((i+1))\ndone"
    );
}

#[test]
fn empty_while_body_emits_null_command() {
    let out = build(|s| s.while_("1", |_| Ok(())));
    assert_eq!(out, "while [ 1 ]; do\n\t:\ndone");
}
