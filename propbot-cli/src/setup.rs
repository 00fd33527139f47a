//! Project setup as an ordered list of idempotent steps.
//!
//! [`SetupRunner::run`] stops at the first failing step and names it in the error; steps that
//! already ran are left as they are.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::error::SetupError;

pub const ENV_TEMPLATE: &str = "\
# Bot token from @BotFather; required for --mode telegram
TELEGRAM_BOT_TOKEN=
# Optional Bot API server, e.g. a local mock
# TELEGRAM_API_URL=http://127.0.0.1:8081
# Optional comma-separated Telegram user ids allowed to use the bot
# TELEGRAM_ALLOWED_USERS=
LOG_FILE=logs/propbot.log
RUST_LOG=info
";

/// One setup action. Running it twice must leave the same result as running it once.
pub trait SetupStep {
    fn name(&self) -> String;
    fn run(&self) -> Result<(), SetupError>;
}

/// A step failed; `step` is its name.
#[derive(Error, Debug)]
#[error("setup failed at step '{step}': {error}")]
pub struct SetupFailure {
    pub step: String,
    pub error: SetupError,
}

#[derive(Default)]
pub struct SetupRunner {
    steps: Vec<Box<dyn SetupStep>>,
}

impl SetupRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(mut self, step: Box<dyn SetupStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Toolchain check, log directory, `.env` template, dependency fetch; all under `root`.
    pub fn default_plan(root: &Path) -> Self {
        Self::new()
            .add_step(Box::new(RequireTool::new(
                "cargo",
                "install the Rust toolchain from https://rustup.rs",
            )))
            .add_step(Box::new(EnsureDir::new(root.join("logs"))))
            .add_step(Box::new(WriteEnvTemplate::new(root.join(".env"))))
            .add_step(Box::new(FetchDependencies::new(root)))
    }

    pub fn step_names(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Runs every step in order. Returns the number of steps run.
    pub fn run(&self) -> Result<usize, SetupFailure> {
        for (i, step) in self.steps.iter().enumerate() {
            let name = step.name();
            info!(step = %name, index = i + 1, total = self.steps.len(), "Running setup step");
            if let Err(error) = step.run() {
                warn!(step = %name, error = %error, "Setup step failed");
                return Err(SetupFailure { step: name, error });
            }
        }
        Ok(self.steps.len())
    }
}

/// Fails with [`SetupError::MissingDependency`] unless `tool` is found on the search path.
pub struct RequireTool {
    tool: String,
    guidance: String,
    search_path: Option<OsString>,
}

impl RequireTool {
    pub fn new(tool: impl Into<String>, guidance: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            guidance: guidance.into(),
            search_path: None,
        }
    }

    /// Searches `path` (PATH syntax) instead of the process PATH.
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    fn locate(&self) -> Option<PathBuf> {
        let path = self.search_path.clone().or_else(|| env::var_os("PATH"))?;
        let exe = format!("{}{}", self.tool, env::consts::EXE_SUFFIX);
        env::split_paths(&path)
            .map(|dir| dir.join(&exe))
            .find(|candidate| candidate.is_file())
    }
}

impl SetupStep for RequireTool {
    fn name(&self) -> String {
        format!("require {}", self.tool)
    }

    #[instrument(skip(self), fields(tool = %self.tool))]
    fn run(&self) -> Result<(), SetupError> {
        match self.locate() {
            Some(found) => {
                info!(path = %found.display(), "Tool found");
                Ok(())
            }
            None => Err(SetupError::MissingDependency {
                tool: self.tool.clone(),
                guidance: self.guidance.clone(),
            }),
        }
    }
}

pub struct EnsureDir {
    path: PathBuf,
}

impl EnsureDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SetupStep for EnsureDir {
    fn name(&self) -> String {
        format!("create {}", self.path.display())
    }

    fn run(&self) -> Result<(), SetupError> {
        fs::create_dir_all(&self.path)?;
        Ok(())
    }
}

/// Writes [`ENV_TEMPLATE`] unless the file already exists; an existing `.env` is never touched.
pub struct WriteEnvTemplate {
    path: PathBuf,
}

impl WriteEnvTemplate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SetupStep for WriteEnvTemplate {
    fn name(&self) -> String {
        format!("write {}", self.path.display())
    }

    fn run(&self) -> Result<(), SetupError> {
        if self.path.exists() {
            info!(path = %self.path.display(), "Env file exists, leaving it as is");
            return Ok(());
        }
        fs::write(&self.path, ENV_TEMPLATE)?;
        info!(path = %self.path.display(), "Env template written");
        Ok(())
    }
}

/// `cargo fetch` in the workspace root, pinned with `--locked` once a `Cargo.lock` exists.
pub struct FetchDependencies {
    workspace_root: PathBuf,
}

impl FetchDependencies {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
        }
    }

    /// Arguments passed to cargo. A fresh checkout has no lockfile, and `--locked` would refuse
    /// to create one.
    pub fn fetch_args(&self) -> Vec<&'static str> {
        if self.workspace_root.join("Cargo.lock").is_file() {
            vec!["fetch", "--locked"]
        } else {
            vec!["fetch"]
        }
    }
}

impl SetupStep for FetchDependencies {
    fn name(&self) -> String {
        "fetch dependencies".to_string()
    }

    fn run(&self) -> Result<(), SetupError> {
        let args = self.fetch_args();
        if !args.contains(&"--locked") {
            warn!(root = %self.workspace_root.display(), "No Cargo.lock, resolving dependencies afresh");
        }
        let status = Command::new("cargo")
            .args(&args)
            .current_dir(&self.workspace_root)
            .status()?;
        if !status.success() {
            return Err(SetupError::StepFailed(format!(
                "cargo {} exited with {}",
                args.join(" "),
                status
            )));
        }
        Ok(())
    }
}
