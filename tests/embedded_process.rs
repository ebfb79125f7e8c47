//! Integration tests for the embedded process lifecycle
//!
//! These drive the public `Creator` / `Process` interface with a scripted
//! `TorApi`, so no linked Tor is needed.

use embedtor::cli::run_until_exit;
use embedtor::{ArgVector, Creator, EmbeddedCreator, Process, ProcessError, TorApi};
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Records every command line and exits with a fixed code
struct ScriptedTor {
    exit_code: i32,
    command_lines: Mutex<Vec<Vec<String>>>,
}

impl ScriptedTor {
    fn new(exit_code: i32) -> Self {
        Self {
            exit_code,
            command_lines: Mutex::new(Vec::new()),
        }
    }
}

impl TorApi for ScriptedTor {
    type Config = Vec<String>;

    fn configure(&self, argv: ArgVector) -> Result<Vec<String>, i32> {
        let args = argv.to_strings();
        self.command_lines.lock().unwrap().push(args.clone());
        Ok(args)
    }

    fn run_main(&self, config: &Vec<String>) -> i32 {
        if config.iter().any(|arg| arg == "--verify-config") {
            return 0;
        }
        self.exit_code
    }
}

/// Never returns from `run_main` while the test runs
struct HangingTor;

impl TorApi for HangingTor {
    type Config = ();

    fn configure(&self, _argv: ArgVector) -> Result<(), i32> {
        Ok(())
    }

    fn run_main(&self, _config: &()) -> i32 {
        loop {
            std::thread::park();
        }
    }
}

#[tokio::test]
async fn test_creator_interface_clean_run() {
    let creator: Box<dyn Creator> = Box::new(EmbeddedCreator::new(ScriptedTor::new(0)));
    let mut process = creator
        .create(
            CancellationToken::new(),
            vec!["--DataDirectory".to_string(), "/tmp/embedtor".to_string()],
        )
        .unwrap();

    process.start().unwrap();
    process.wait().await.unwrap();
}

#[tokio::test]
async fn test_exit_code_surfaces_through_interface() {
    let creator = EmbeddedCreator::new(ScriptedTor::new(1));
    let mut process = creator.create(CancellationToken::new(), Vec::new()).unwrap();

    process.start().unwrap();
    match process.wait().await {
        Err(ProcessError::Exit { code }) => assert_eq!(code, 1),
        other => panic!("expected exit error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_processes_are_independent() {
    let creator = EmbeddedCreator::new(ScriptedTor::new(0));

    let mut first = creator.process(CancellationToken::new(), vec!["--verify-config".to_string()]);
    let mut second = creator.process(CancellationToken::new(), Vec::new());

    // Starting one does not start the other
    first.start().unwrap();
    assert!(first.is_started());
    assert!(!second.is_started());
    assert!(matches!(second.wait().await, Err(ProcessError::NotStarted)));

    first.wait().await.unwrap();
    assert_eq!(first.args(), ["--verify-config"]);
}

#[tokio::test]
async fn test_pre_cancelled_token_returns_immediately() {
    let creator = EmbeddedCreator::new(HangingTor);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let mut process = creator.create(cancel, Vec::new()).unwrap();
    process.start().unwrap();
    assert!(matches!(process.wait().await, Err(ProcessError::Cancelled)));
    // Still started; a second start is rejected
    assert!(matches!(process.start(), Err(ProcessError::AlreadyStarted)));
}

#[tokio::test]
async fn test_run_until_exit_reports_failure() {
    let creator = EmbeddedCreator::new(ScriptedTor::new(2));
    let err = run_until_exit(&creator, Vec::new()).await.unwrap_err();

    let process_err = err.downcast_ref::<ProcessError>().unwrap();
    assert_eq!(process_err.code(), Some(2));
}

#[tokio::test]
async fn test_run_until_exit_clean() {
    let creator = EmbeddedCreator::new(ScriptedTor::new(0));
    run_until_exit(&creator, vec!["--quiet".to_string()])
        .await
        .unwrap();
}
