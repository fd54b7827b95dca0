use std::fs;

use huffman_codec::{compress, decompress, storage, Error};
use tempfile::tempdir;

#[test]
fn artifacts_survive_the_file_system() {
    let dir = tempdir().unwrap();
    let text_path = dir.path().join("text.txt");
    let packed_path = dir.path().join("out.bin");
    let tree_path = dir.path().join("tree.json");

    let text = "Beware the Jabberwock, my son!\nThe jaws that bite, the claws that catch!\n";
    storage::write_text(&text_path, text).unwrap();

    let c = compress(&storage::read_text(&text_path).unwrap()).unwrap();
    storage::write_packed(&packed_path, &c.packed).unwrap();
    storage::write_tree(&tree_path, &c.tree).unwrap();

    assert_eq!(fs::read(&packed_path).unwrap(), c.packed);
    assert!(fs::read_to_string(&tree_path).unwrap().starts_with("{\n  \"0\": {"));

    let packed = storage::read_packed(&packed_path).unwrap();
    let tree = storage::read_tree(&tree_path).unwrap();
    assert_eq!(decompress(&packed, &tree).unwrap(), text);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.bin");

    match storage::read_packed(&path) {
        Err(Error::Io(_, p)) => assert_eq!(p, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn corrupt_tree_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tree.json");
    fs::write(&path, r#"{"0": {"char": "a"}, "1": 7}"#).unwrap();

    assert!(matches!(storage::read_tree(&path), Err(Error::Json(_))));
}
