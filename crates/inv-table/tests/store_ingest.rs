//! Durable-write-first contract of the upload store.

use inv_core::Error;
use inv_table::inventory;
use inv_table::UploadStore;

#[test]
fn ingest_parses_valid_upload() {
    let dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(dir.path()).unwrap();

    let csv = b"Location,Item,Category,Count,Value\nA,Widget,Tools,10,100.0\n";
    let (path, frame) = store.ingest("inventory.csv", csv).unwrap();

    assert!(path.is_file());
    assert_eq!(frame.n_rows(), 1);
    assert_eq!(inventory::list_locations(&frame).unwrap(), vec!["A"]);
}

#[test]
fn malformed_upload_still_lands_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(dir.path()).unwrap();

    let garbage: &[u8] = &[0xff, 0xfe, 0x00, 0x9c, 0x13, 0x37];
    let err = store.ingest("garbage.csv", garbage).unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got: {err}");

    // The write happens before the parse, so the bytes survive the failure.
    let stored = std::fs::read(dir.path().join("garbage.csv")).unwrap();
    assert_eq!(stored, garbage);
    assert!(store.contains("garbage.csv").unwrap());
}

#[test]
fn reupload_overwrites_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(dir.path()).unwrap();

    store
        .ingest("inv.csv", b"Location,Count\nA,1\n".as_slice())
        .unwrap();
    store
        .ingest("inv.csv", b"Location,Count\nA,1\nB,2\n".as_slice())
        .unwrap();

    let frame = store.load("inv.csv").unwrap();
    assert_eq!(frame.n_rows(), 2);
}

#[test]
fn load_of_unknown_upload_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(dir.path()).unwrap();
    let err = store.load("nope.csv").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
