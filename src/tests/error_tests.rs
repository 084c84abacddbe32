//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::kauai_trie::KauaiTrieError;
use crate::data_structures::lanai_hash_table::LanaiHashError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, ErrorReporting, PhonebookError,
    TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = PhonebookError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that component errors convert and keep their message.
#[test]
fn test_nested_errors() {
    let error: PhonebookError = KauaiTrieError::EmptyKey.into();
    assert!(matches!(error, PhonebookError::Index(KauaiTrieError::EmptyKey)));
    assert_eq!(error.to_string(), "Index error: Empty key not allowed");

    let error: PhonebookError = LanaiHashError::AllocationFailed { requested: 28 }.into();
    assert!(error.to_string().starts_with("Store error: Failed to allocate 28 buckets"));

    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = PhonebookError::Io(io_error);
    assert!(error.to_string().contains("file not found"));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that a local reporting holder dispatches to its reporter.
#[test]
fn test_error_reporting_dispatch() {
    let reporter = Arc::new(MockErrorReporter::default());
    let mut reporting = ErrorReporting::default();
    reporting.set_reporter(reporter.clone());

    reporting.report(ErrorContext::new(
        PhonebookError::Custom("first".to_string()),
        "test_component",
    ));
    reporting.report(ErrorContext::new(
        PhonebookError::MissingValue("alice".to_string()),
        "test_component",
    ));

    assert_eq!(reporter.reported_count(), 2);
}

/// Test that the global error reporter works correctly.
///
/// Note: This is the only unit test that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let error = PhonebookError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = PhonebookError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("while loading");

    // Just make sure this doesn't panic
    reporter.report(context);
}
