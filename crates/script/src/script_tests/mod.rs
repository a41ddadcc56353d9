// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script builder tests.

mod commands;
mod control;
mod primitives;

use crate::{Script, ScriptError};

/// Run one builder chain on a fresh script and return its output.
fn build<F>(f: F) -> String
where
    F: FnOnce(&mut Script) -> Result<&mut Script, ScriptError>,
{
    let mut script = Script::new();
    f(&mut script).unwrap();
    script.generate()
}

/// Route builder traces to the test harness output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("psh_script=trace"))
        .with_test_writer()
        .try_init();
}

/// Run a builder chain that must fail, and check the script was untouched.
fn build_err<F>(prefix: &str, f: F) -> ScriptError
where
    F: FnOnce(&mut Script) -> Result<&mut Script, ScriptError>,
{
    let mut script = Script::new();
    if !prefix.is_empty() {
        script.command("", [prefix]).unwrap();
    }
    let before = script.clone();
    let err = f(&mut script).unwrap_err();
    assert_eq!(script, before, "failed call must not change the script");
    err
}
