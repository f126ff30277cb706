use crate::core::errors::{Error, Result};
use crate::models::item::Item;
use crate::models::report::CopiedFile;
use std::fs;
use std::path::Path;

/// Copies `item` to `output_folder/<item name>`, creating or truncating the
/// destination. The source is left in place.
pub fn move_file(item: &Item, output_folder: &Path) -> Result<CopiedFile> {
    let contents = item
        .read_contents()?
        .ok_or_else(|| Error::NotAFile(item.path().to_path_buf()))?;

    let destination = output_folder.join(item.file_name());
    fs::write(&destination, &contents).map_err(|e| Error::at(e, &destination))?;

    Ok(CopiedFile {
        source: item.path().to_path_buf(),
        destination,
        bytes: contents.len() as u64,
    })
}
