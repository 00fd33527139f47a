//! Setup runner: ordered steps, stop at first failure, idempotent file steps.

use std::cell::Cell;
use std::fs;
use std::rc::Rc;

use propbot_cli::setup::{EnsureDir, FetchDependencies, RequireTool, WriteEnvTemplate, ENV_TEMPLATE};
use propbot_cli::{SetupError, SetupRunner, SetupStep};

struct Counted {
    name: &'static str,
    runs: Rc<Cell<usize>>,
    fail: bool,
}

impl SetupStep for Counted {
    fn name(&self) -> String {
        self.name.to_string()
    }

    fn run(&self) -> Result<(), SetupError> {
        self.runs.set(self.runs.get() + 1);
        if self.fail {
            Err(SetupError::StepFailed("disk full".to_string()))
        } else {
            Ok(())
        }
    }
}

fn counted(name: &'static str, runs: &Rc<Cell<usize>>, fail: bool) -> Box<dyn SetupStep> {
    Box::new(Counted {
        name,
        runs: runs.clone(),
        fail,
    })
}

#[test]
fn test_runner_stops_at_first_failure() {
    let before = Rc::new(Cell::new(0));
    let failing = Rc::new(Cell::new(0));
    let after = Rc::new(Cell::new(0));
    let runner = SetupRunner::new()
        .add_step(counted("first", &before, false))
        .add_step(counted("broken", &failing, true))
        .add_step(counted("last", &after, false));

    let err = runner.run().unwrap_err();

    assert_eq!(err.step, "broken");
    assert_eq!(
        err.to_string(),
        "setup failed at step 'broken': disk full"
    );
    assert_eq!((before.get(), failing.get(), after.get()), (1, 1, 0));
}

#[test]
fn test_missing_tool_is_reported_with_guidance() {
    let dir = tempfile::tempdir().unwrap();
    let step = RequireTool::new("cargo", "install Rust").with_search_path(dir.path());

    match step.run() {
        Err(SetupError::MissingDependency { tool, guidance }) => {
            assert_eq!(tool, "cargo");
            assert_eq!(guidance, "install Rust");
        }
        other => panic!("expected MissingDependency, got {:?}", other),
    }

    let exe = format!("cargo{}", std::env::consts::EXE_SUFFIX);
    fs::write(dir.path().join(exe), "").unwrap();
    assert!(step.run().is_ok());
}

#[test]
fn test_file_steps_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    let env_file = dir.path().join(".env");
    let runner = SetupRunner::new()
        .add_step(Box::new(EnsureDir::new(&logs)))
        .add_step(Box::new(WriteEnvTemplate::new(&env_file)));

    assert_eq!(runner.run().unwrap(), 2);
    assert!(logs.is_dir());
    assert_eq!(fs::read_to_string(&env_file).unwrap(), ENV_TEMPLATE);

    fs::write(&env_file, "TELEGRAM_BOT_TOKEN=kept\n").unwrap();
    assert_eq!(runner.run().unwrap(), 2);
    assert_eq!(
        fs::read_to_string(&env_file).unwrap(),
        "TELEGRAM_BOT_TOKEN=kept\n"
    );
}

#[test]
fn test_default_plan_order() {
    let dir = tempfile::tempdir().unwrap();
    let names = SetupRunner::default_plan(dir.path()).step_names();
    assert_eq!(names.len(), 4);
    assert_eq!(names[0], "require cargo");
    assert!(names[1].starts_with("create "));
    assert!(names[2].ends_with(".env"));
    assert_eq!(names[3], "fetch dependencies");
}

#[test]
fn test_fetch_locks_only_when_lockfile_exists() {
    let dir = tempfile::tempdir().unwrap();
    let step = FetchDependencies::new(dir.path());
    assert_eq!(step.fetch_args(), vec!["fetch"]);

    fs::write(dir.path().join("Cargo.lock"), "version = 4\n").unwrap();
    assert_eq!(step.fetch_args(), vec!["fetch", "--locked"]);
}
