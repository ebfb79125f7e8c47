//! Integration tests against the statically linked Tor
//!
//! These need a binary built with `--features linked-tor` and a
//! tor-static tree under `TOR_STATIC_DIR`.
//! Run with: `cargo test --features linked-tor --test linked_tor -- --ignored`

#![cfg(feature = "linked-tor")]

use embedtor::{Creator, EmbeddedCreator, ProcessError};
use tokio_util::sync::CancellationToken;

#[tokio::test]
#[ignore = "requires statically linked Tor"]
async fn test_linked_version_exits_cleanly() {
    let creator = EmbeddedCreator::linked();
    let mut process = creator
        .create(CancellationToken::new(), vec!["--version".to_string()])
        .unwrap();

    process.start().unwrap();
    process.wait().await.unwrap();
}

#[tokio::test]
#[ignore = "requires statically linked Tor"]
async fn test_linked_rejects_unknown_option() {
    let creator = EmbeddedCreator::linked();
    let mut process = creator
        .create(
            CancellationToken::new(),
            vec!["--NoSuchOption".to_string(), "1".to_string()],
        )
        .unwrap();

    process.start().unwrap();
    assert!(matches!(
        process.wait().await,
        Err(ProcessError::Exit { .. })
    ));
}

#[tokio::test]
#[ignore = "requires statically linked Tor"]
async fn test_linked_control_conn_unsupported() {
    let creator = EmbeddedCreator::linked();
    let mut process = creator.create(CancellationToken::new(), Vec::new()).unwrap();
    assert!(matches!(
        process.embedded_control_conn().err(),
        Some(ProcessError::ControlConnUnsupported)
    ));
}
