//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use std::sync::Arc;

use crate::error::catalog::CatalogError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, MakaiError,
    TracingErrorReporter,
};

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = MakaiError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let makai_error = MakaiError::Io(io_error);

    let error_string = format!("{makai_error}");
    assert!(error_string.contains("file not found"));
}

/// Test that catalog errors convert into the crate error.
#[test]
fn test_catalog_error_conversion() {
    let makai_error: MakaiError =
        CatalogError::FetchFailed("store unavailable".to_string()).into();

    assert!(matches!(makai_error, MakaiError::Catalog(_)));
    assert!(format!("{makai_error}").contains("store unavailable"));
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: std::sync::atomic::AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count
            .load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

/// Test that reporters receive contexts they are handed.
#[test]
fn test_reporter_receives_contexts() {
    let reporter = MockErrorReporter::new();

    reporter.report(ErrorContext::new(
        MakaiError::Custom("first".to_string()),
        "component_a",
    ));
    reporter.report(ErrorContext::new(
        MakaiError::Custom("second".to_string()),
        "component_b",
    ));

    assert_eq!(reporter.reported_count(), 2);
}

/// Test that the tracing reporter handles contexts without panicking.
#[test]
fn test_tracing_reporter_smoke() {
    let reporter = TracingErrorReporter;
    reporter.report(
        ErrorContext::new(MakaiError::Custom("smoke".to_string()), "test").with_details("detail"),
    );
}

/// Test that installing the global reporter is idempotent and that
/// reporting never panics, configured or not.
#[test]
fn test_global_reporter_installation() {
    report_error(ErrorContext::new(
        MakaiError::Custom("before install".to_string()),
        "test",
    ));

    set_error_reporter(Arc::new(TracingErrorReporter));
    // A second install is ignored rather than panicking
    set_error_reporter(Arc::new(TracingErrorReporter));

    report_error(ErrorContext::new(
        MakaiError::Custom("after install".to_string()),
        "test",
    ));
}
