use std::fs;
use std::thread;

use tempfile::tempdir;

use sealnote_core::crypto::{decrypt, decrypt_with_key_text, encrypt, generate_key, Envelope};
use sealnote_core::storage::{FileSlot, MemorySlot, SlotStore, SqliteSlot};
use sealnote_core::SealError;

fn backends(dir: &std::path::Path) -> Vec<Box<dyn SlotStore>> {
    vec![
        Box::new(MemorySlot::new()),
        Box::new(FileSlot::new(dir.join("document.sealed"))),
        Box::new(SqliteSlot::open(&dir.join("slots.db")).expect("sqlite should open")),
        Box::new(SqliteSlot::open_in_memory().expect("sqlite should open")),
    ]
}

#[test]
fn test_fresh_slots_are_empty() {
    let dir = tempdir().unwrap();
    for store in backends(dir.path()) {
        assert!(
            matches!(store.get(), Err(SealError::EmptySlot)),
            "{} not empty",
            store.location()
        );
        assert!(store.is_empty());
    }
}

#[test]
fn test_last_put_wins() {
    let dir = tempdir().unwrap();
    let key = generate_key().unwrap();

    for store in backends(dir.path()) {
        let first = encrypt("first draft", &key).unwrap();
        let second = encrypt("second draft", &key).unwrap();

        store.put(&first).expect("put should succeed");
        store.put(&second).expect("put should succeed");

        let stored = store.get().expect("get should succeed");
        assert_eq!(stored, second, "{}", store.location());
        assert_eq!(decrypt(&stored, &key).unwrap(), "second draft");
        assert!(!store.is_empty());
    }
}

#[test]
fn test_envelopes_are_stored_verbatim() {
    let dir = tempdir().unwrap();
    let odd = Envelope::from("not an envelope at all\nwith a newline");

    for store in backends(dir.path()) {
        store.put(&odd).unwrap();
        assert_eq!(store.get().unwrap(), odd, "{}", store.location());
    }
}

#[test]
fn test_file_slot_holds_only_ciphertext() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("document.sealed");
    let key = generate_key().unwrap();
    let store = FileSlot::new(&path);

    store
        .put(&encrypt("secret entry with marker: PLAINTEXT_MARKER_123", &key).unwrap())
        .unwrap();

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.starts_with("v1:"));
    assert!(!on_disk.contains("PLAINTEXT_MARKER_123"));
    assert!(!on_disk.contains(&key.to_hex()));
}

#[test]
fn test_file_slot_visible_to_a_second_handle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("document.sealed");
    let key = generate_key().unwrap();

    FileSlot::new(&path)
        .put(&encrypt("# Hello", &key).unwrap())
        .unwrap();

    let reopened = FileSlot::new(&path).get().unwrap();
    assert_eq!(decrypt(&reopened, &key).unwrap(), "# Hello");
}

#[test]
fn test_flipped_byte_in_slot_file_fails_decryption() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("document.sealed");
    let key = generate_key().unwrap();
    let store = FileSlot::new(&path);
    store.put(&encrypt("# Hello", &key).unwrap()).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    for index in 0..bytes.len() {
        let original = bytes[index];
        bytes[index] ^= 0x80;
        fs::write(&path, &bytes).unwrap();

        let envelope = store.get().expect("damaged slot is not empty");
        assert!(matches!(
            decrypt(&envelope, &key),
            Err(SealError::Decryption)
        ));
        bytes[index] = original;
    }
}

#[test]
fn test_concurrent_puts_keep_one_written_envelope() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("document.sealed");
    let key = generate_key().unwrap();
    let documents: Vec<String> = (0..4)
        .map(|i| format!("# Writer {}\n{}", i, "x".repeat(256 * 1024)))
        .collect();
    let envelopes: Vec<Envelope> = documents
        .iter()
        .map(|doc| encrypt(doc, &key).unwrap())
        .collect();

    let shared = FileSlot::new(&path);
    for _ in 0..25 {
        thread::scope(|scope| {
            for envelope in &envelopes {
                let shared = &shared;
                scope.spawn(move || shared.put(envelope).expect("put should succeed"));
                // A second handle on the same path races without the shared lock.
                let slot_path = &path;
                scope.spawn(move || {
                    FileSlot::new(slot_path)
                        .put(envelope)
                        .expect("put should succeed")
                });
            }
        });

        let stored = shared.get().expect("slot should hold an envelope");
        assert!(envelopes.contains(&stored));
        let opened = decrypt_with_key_text(&stored, &key.to_hex()).unwrap();
        assert!(documents.contains(&opened));
    }
}
