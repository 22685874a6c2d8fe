//! Common test utilities for Cosmo CLI tests.
//!
//! `TestEnv` owns a temp directory that acts as the working directory and as
//! `XDG_CONFIG_HOME`, so runs never pick up a real user configuration.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Config used by most CLI tests.
pub const WEB_CONFIG: &str = r#"
[[servers]]
name = "web1"
host = "deploy@web1.example.com"

[[servers.tasks]]
name = "deploy"
local = ["cargo build --release", "scp target/release/app web1:/srv/app"]
remote = ["systemctl restart app"]

[[servers.tasks]]
name = "build"
local = ["cargo build --release"]

[[servers]]
name = "web2"

[[servers.tasks]]
name = "deploy"
remote = ["systemctl restart app"]

[[servers]]
name = "db1"

[[servers.tasks]]
name = "backup"
remote = ["pg_dump app > /backups/app.sql"]
"#;

/// Result of running the cosmo binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("xdg")).unwrap();
        Self { dir }
    }

    /// Environment with `cosmo.toml` in the working directory.
    pub fn with_config(content: &str) -> Self {
        let env = Self::new();
        env.write("cosmo.toml", content);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_cosmo"));
        cmd.args(args)
            .current_dir(self.dir.path())
            .env_remove("COSMO_CONFIG")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.path("xdg"));
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        run(cmd)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

fn run(mut cmd: Command) -> TestResult {
    let output = cmd.output().unwrap();
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
