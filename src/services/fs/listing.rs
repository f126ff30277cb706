use crate::core::errors::{Error, Result};
use crate::models::item::Item;
use std::fs;
use std::path::Path;

/// Lists the immediate children of `directory`, in whatever order the
/// platform yields them.
pub fn list_items(directory: &Path) -> Result<Vec<Item>> {
    let read_dir = fs::read_dir(directory).map_err(|e| Error::at(e, directory))?;

    let mut items = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::at(e, directory))?;
        items.push(Item::new(entry.file_name(), directory));
    }
    Ok(items)
}

/// Creates exactly one directory level. An existing entry is an error, never
/// merged into.
pub fn create_folder(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|e| Error::at(e, path))
}
