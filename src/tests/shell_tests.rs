//! Tests for the interactive shell, driven through in-memory I/O.

use std::io::Cursor;

use crate::directory::{Contact, Directory};
use crate::shell::Shell;

/// Runs a session over `input` and returns everything written.
fn run_session(directory: &mut Directory, input: &str) -> String {
    let mut output = Vec::new();
    Shell::new(directory, Cursor::new(input.as_bytes()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_insert_then_search() {
    let mut directory = Directory::new();
    let output = run_session(
        &mut directory,
        "1\nalice\n111\n1\nalan\n222\n2\nal\n3\n",
    );

    assert!(output.contains("suggestions of al are\nalan  222\nalice  111\n"));
    assert_eq!(directory.len(), 2);
}

#[test]
fn test_search_not_found_on_last_character() {
    let mut directory = Directory::new();
    directory.insert_contact("bob", 333).unwrap();

    let output = run_session(&mut directory, "2\nbax\n3\n");
    assert!(output.contains("Not found\n"));
    assert!(!output.contains("No Results Found"));
}

#[test]
fn test_search_not_found_skips_first_mismatch() {
    let mut directory = Directory::new();
    directory.insert_contact("alice", 111).unwrap();

    let output = run_session(&mut directory, "2\nalxyz\n3\n");
    assert!(output.contains("Not found\nNo Results Found for alxy\nNo Results Found for alxyz\n"));
    assert!(!output.contains("No Results Found for alx\n"));
    assert!(!output.contains("No Results Found for al\n"));
}

#[test]
fn test_invalid_choice_and_bad_input_keep_looping() {
    let mut directory = Directory::new();
    let output = run_session(
        &mut directory,
        "9\n1\nBob\n5\n1\nbob\nnot-a-number\n1\nbob\n42\n3\n",
    );

    assert!(output.contains("Invalid choice!"));
    assert!(output.contains("Error: Index error: Invalid character 'B'"));
    assert!(output.contains("Invalid phone number: not-a-number"));
    assert_eq!(
        directory.lookup_by_prefix("bob").unwrap().contacts(),
        Some(&[Contact::new("bob", 42)][..])
    );
}

#[test]
fn test_end_of_input_ends_session() {
    let mut directory = Directory::new();

    // Input stops in the middle of an insert
    let output = run_session(&mut directory, "1\ncarol\n");
    assert!(output.ends_with("Enter the phone number of the contact: "));
    assert!(directory.is_empty());

    let output = run_session(&mut directory, "");
    assert!(output.starts_with("1. Insert Contact"));
}

#[test]
fn test_dump_buckets() {
    let mut directory = Directory::new();
    let output = run_session(&mut directory, "1\na\n1\n4\n3\n");

    assert!(output.contains("Bucket 0 ->\n"));
    assert!(output.contains("Bucket 6 -> a ->\n"));
}

#[test]
fn test_search_empty_directory() {
    let mut directory = Directory::new();
    let output = run_session(&mut directory, "2\n\n3\n");
    assert!(output.contains("No contacts stored"));
}
