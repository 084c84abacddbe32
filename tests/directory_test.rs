// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the contact directory through the public API.

use std::io::Cursor;

use mauka_phonebook_lib::config::{ConfigLoader, PhonebookConfig};
use mauka_phonebook_lib::data_structures::lanai_hash_table::LanaiHashTable;
use mauka_phonebook_lib::directory::{Contact, Directory, Lookup};
use mauka_phonebook_lib::shell::Shell;

#[test]
fn test_directory_scenario() {
    let mut directory = Directory::new();
    directory.insert_contact("alice", 111).unwrap();
    directory.insert_contact("alan", 222).unwrap();
    directory.insert_contact("bob", 333).unwrap();

    assert_eq!(
        directory.lookup_by_prefix("al").unwrap().contacts(),
        Some(&[Contact::new("alan", 222), Contact::new("alice", 111)][..])
    );
    assert_eq!(
        directory.lookup_by_prefix("b").unwrap().contacts(),
        Some(&[Contact::new("bob", 333)][..])
    );
    assert!(matches!(
        directory.lookup_by_prefix("z").unwrap(),
        Lookup::NotFound { matched: 0, .. }
    ));
}

#[test]
fn test_many_contacts_survive_repeated_growth() {
    let mut directory = Directory::new();
    let names: Vec<String> = (0..500u32)
        .map(|i| {
            // Base-26 spelling of i, at least three letters
            let mut n = i;
            let mut name = String::new();
            for _ in 0..3 {
                name.push(char::from(b'a' + (n % 26) as u8));
                n /= 26;
            }
            name
        })
        .collect();

    for (i, name) in names.iter().enumerate() {
        directory.insert_contact(name, i as i64).unwrap();
        assert!(directory.phones().load_factor() <= 0.7);
    }

    // 7 -> 14 -> ... -> 896 buckets
    assert_eq!(directory.phones().bucket_count(), 896);
    assert_eq!(directory.len(), 500);

    let everyone = directory.lookup_by_prefix("").unwrap();
    let contacts = everyone.contacts().unwrap();
    assert_eq!(contacts.len(), 500);
    assert!(contacts.windows(2).all(|w| w[0].name < w[1].name));
    for contact in contacts {
        let i = names.iter().position(|n| *n == contact.name).unwrap();
        assert_eq!(contact.phone, i as i64);
    }
}

#[test]
fn test_raw_table_keeps_duplicate_entries() {
    let mut table = LanaiHashTable::new();
    table.insert("dana", 1_i64).unwrap();
    table.insert("dana", 2_i64).unwrap();

    assert_eq!(table.search("dana"), Some(&2));
    assert_eq!(table.len(), 2);
    let rendered = table.to_string();
    assert!(rendered.contains("dana -> dana ->"));
}

#[test]
fn test_shell_against_configured_directory() {
    let mut config = PhonebookConfig::default();
    config.index.fold_case = true;
    let mut directory = Directory::with_config(&config).unwrap();

    let mut output = Vec::new();
    Shell::new(
        &mut directory,
        Cursor::new("1\nZed\n5551234\n2\nz\n3\n"),
        &mut output,
    )
    .run()
    .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("suggestions of z are\nzed  5551234\n"));
}

#[test]
fn test_loader_without_file_uses_defaults() {
    let config = ConfigLoader::new(None::<&str>, "TEST_PB_INTEGRATION")
        .load()
        .unwrap();
    assert_eq!(config, PhonebookConfig::default());
}
