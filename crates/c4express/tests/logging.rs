//! Integration tests for tracing output during a run
//!
//! The pipeline emits spans and events for every stage; these tests drive it
//! under a test subscriber and through the global initializer.

use c4express::core::logging::{init_logging, resolve_log_format, LogFormat};
use c4express::transform;
use tracing_subscriber::util::SubscriberInitExt;

const DEFINITION: &str = r#"{
    "elements": [
        {"type": "Person", "name": "User", "position": "1,x"},
        {"type": "Software System", "name": "S", "containers": [{"name": "C"}]}
    ],
    "relationships": [{"source": "User", "destination": "C"}],
    "styles": [{"type": "element", "tag": "Person", "width": "wide"}],
    "type": "Container",
    "scope": "S"
}"#;

#[test]
fn test_pipeline_under_trace_subscriber() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let result = transform(DEFINITION);
    assert_eq!(result.messages.errors().len(), 1);
    assert_eq!(result.messages.warnings().len(), 1);
    let workspace = result.workspace.unwrap();
    assert_eq!(workspace.views.container_views[0].element_ids(), vec![1, 3]);
}

#[test]
fn test_decode_failure_under_subscriber() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .set_default();

    let result = transform("{");
    assert!(result.workspace.is_none());
    assert!(result.has_errors());
}

#[test]
fn test_global_initializer() {
    // A second initialization reports an error instead of panicking
    let _ = init_logging(Some("debug"), Some("compact"));
    let second = init_logging(Some("debug"), Some("compact"));
    assert!(second.is_err());

    let result = transform(DEFINITION);
    assert!(result.workspace.is_some());
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(init_logging(Some("info"), Some("xml")).is_err());
    assert_eq!(resolve_log_format(Some("pretty")), Ok(LogFormat::Pretty));
}
