//! Render configuration specs
//!
//! Verify a config file loaded from disk controls the generated layout and
//! that the result still runs.

use crate::prelude::*;
use psh_core::{Indent, RenderConfig};

fn counter(config: RenderConfig) -> Script {
    let mut script = Script::with_config(config);
    script
        .shebang_default()
        .unwrap()
        .set("i", 0)
        .unwrap()
        .while_(Condition::new().is("i").less_than(3), |body| {
            body.echo("$i")?.increment("i", 1)?;
            Ok(())
        })
        .unwrap();
    script
}

#[test]
fn spaces_indent_from_file() {
    let ws = Workspace::empty();
    ws.file(
        "render.toml",
        "indent = { spaces = 2 }\ninterpreter = \"/bin/dash\"\n",
    );
    let config = RenderConfig::load(&ws.path().join("render.toml")).unwrap();
    assert_eq!(config.indent, Indent::Spaces(2));

    let script = counter(config);
    assert_eq!(
        script.generate(),
        "#!/bin/dash\ni=0\nwhile [ $i -lt 3 ]; do\n  echo -n $i\n  i=$((i+1))\ndone"
    );
    run(&script).passes().stdout_eq("012");
}

#[test]
fn default_config_uses_tabs() {
    let script = counter(RenderConfig::default());
    assert!(script.generate().contains("\n\techo -n $i\n"));
    run(&script).passes().stdout_eq("012");
}

#[test]
fn invalid_config_file_is_rejected() {
    let ws = Workspace::empty();
    ws.file("render.toml", "indent = { spaces = 0 }\n");
    let err = RenderConfig::load(&ws.path().join("render.toml")).unwrap_err();
    assert!(err.to_string().contains("indent"), "unexpected error: {}", err);
}
