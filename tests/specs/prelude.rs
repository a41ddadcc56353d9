//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running generated scripts under `sh`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub use psh_script::{Args, Condition, CountMode, Script, ScriptError, Signal};

/// Interpreter used to run generated scripts.
const SHELL: &str = "sh";

/// Run a generated script
pub fn run(script: &Script) -> RunBuilder {
    RunBuilder::new(script.generate())
}

/// Builder for one `sh -c` invocation
pub struct RunBuilder {
    source: String,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl RunBuilder {
    fn new(source: String) -> Self {
        Self {
            source,
            dir: None,
            envs: Vec::new(),
        }
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = Command::new(SHELL);
        cmd.arg("-c").arg(&self.source);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let source = self.source.clone();
        let mut cmd = self.command();
        let output = cmd.output().expect("sh should run");
        assert!(
            output.status.success(),
            "expected script to pass, got exit code {:?}\nscript:\n{}\nstdout: {}\nstderr: {}",
            output.status.code(),
            source,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let source = self.source.clone();
        let mut cmd = self.command();
        let output = cmd.output().expect("sh should run");
        assert!(
            !output.status.success(),
            "expected script to fail, but it passed\nscript:\n{}\nstdout: {}\nstderr: {}",
            source,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a script run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Exit code, if the process exited normally
    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert the exit code.
    pub fn code_eq(self, expected: i32) -> Self {
        assert_eq!(self.code(), Some(expected), "stderr: {}", self.stderr());
        self
    }
}

// =============================================================================
// Workspace
// =============================================================================

/// Temporary directory a script can work in.
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `name` inside the workspace, as a string
    pub fn join(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().into_owned()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.dir.path().join(path.as_ref())).unwrap()
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.dir.path().join(path.as_ref()).exists()
    }

    /// Run a script with the workspace as working directory
    pub fn run(&self, script: &Script) -> RunBuilder {
        run(script).pwd(self.path())
    }
}
