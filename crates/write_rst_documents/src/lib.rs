// crates/write_rst_documents/src/lib.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rst_marker::rst_file_name;

mod collection;

pub use collection::DocumentCollection;

/// Writes every document of `documents` to `<directory>/<name>.rst`.
///
/// The directory (and any missing parent) is created first. Existing files
/// are overwritten. Files written before a failure are left in place.
///
/// Returns the written paths in collection order.
pub fn write_rst_documents<P: AsRef<Path>>(
    directory: P,
    documents: &DocumentCollection,
) -> Result<Vec<PathBuf>> {
    let directory = directory.as_ref();
    fs::create_dir_all(directory)
        .with_context(|| format!("Error creating directory {}", directory.display()))?;

    let mut written = Vec::with_capacity(documents.len());
    for (name, text) in documents.iter() {
        let path = directory.join(rst_file_name(name));
        fs::write(&path, text)
            .with_context(|| format!("Error writing file {}", path.display()))?;
        log::debug!("Wrote {} ({} bytes)", path.display(), text.len());
        written.push(path);
    }

    Ok(written)
}
