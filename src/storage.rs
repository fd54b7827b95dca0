//! File-system access for the three codec artifacts: the input text, the
//! packed bytes and the serialized tree.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::repr::TreeRepr;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |e| Error::Io(e, path.to_path_buf())
}

pub fn read_text(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(io_error(path))
}

pub fn write_text(path: &Path, text: &str) -> Result<(), Error> {
    fs::write(path, text).map_err(io_error(path))
}

pub fn read_packed(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(io_error(path))
}

pub fn write_packed(path: &Path, packed: &[u8]) -> Result<(), Error> {
    fs::write(path, packed).map_err(io_error(path))
}

pub fn read_tree(path: &Path) -> Result<TreeRepr<char>, Error> {
    TreeRepr::from_json(&read_text(path)?)
}

pub fn write_tree(path: &Path, tree: &TreeRepr<char>) -> Result<(), Error> {
    write_text(path, &tree.to_json()?)
}
