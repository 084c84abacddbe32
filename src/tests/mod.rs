//! Test modules for the Mauka Phonebook.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Directory behavior, including property-based tests using proptest
//! - The interactive shell driven through in-memory I/O
//! - Shared strategies and fixtures

pub mod error_tests;
pub mod shell_tests;

pub use test_utils::{contact_batch_strategy, name_strategy, prefix_strategy, TestFixture};
