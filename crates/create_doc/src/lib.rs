// crates/create_doc/src/lib.rs

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use build_index_pages::{build_collection_index, build_top_index};
use extract_rst_block::extract_rst_document;
use rst_marker::{INDEX_NAME, MACROS_DIR};
use write_rst_documents::{write_rst_documents, DocumentCollection};

pub mod config;
pub mod logging;

pub use config::DocConfig;

/// Outcome of a successful run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of per-macro documents written.
    pub documents: usize,
    /// Every file written, in write order.
    pub written: Vec<PathBuf>,
}

/// Document name for a macro file: its base name without the extension.
///
/// Fails when the path has no file name or the name is not valid UTF-8.
pub fn document_name(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .ok_or_else(|| anyhow!("Cannot derive a document name from {}", path.display()))?;
    stem.to_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("File name of {} is not valid UTF-8", path.display()))
}

/// Extracts the rST document of every macro file, in the given order.
/// The first file that cannot be read aborts the whole collection.
pub fn collect_documents(macros: &[PathBuf]) -> Result<DocumentCollection> {
    let mut documents = DocumentCollection::new();
    for path in macros {
        let name = document_name(path)?;
        let text = extract_rst_document(path)
            .with_context(|| format!("Failed to extract documentation for {}", name))?;
        if documents.insert(name.as_str(), text).is_some() {
            log::debug!("Replacing earlier document {} with {}", name, path.display());
        }
    }
    Ok(documents)
}

/// Generates the Sphinx sources for `config.macros` under `config.source`:
///
/// ```text
/// <source>/index.rst
/// <source>/macros/index.rst
/// <source>/macros/<name>.rst
/// ```
pub fn create_documentation(config: &DocConfig) -> Result<RunSummary> {
    log::info!("====== Start creating documentation ======");
    log::info!("Logging to file {}", config.logfile.display());

    let documents = collect_documents(&config.macros)?;
    let macros_dir = config.source.join(MACROS_DIR);

    let mut summary = RunSummary {
        documents: documents.len(),
        written: write_rst_documents(&macros_dir, &documents)?,
    };

    let top_index = DocumentCollection::single(INDEX_NAME, build_top_index(&config.project));
    summary
        .written
        .extend(write_rst_documents(&config.source, &top_index)?);

    let collection_index = DocumentCollection::single(
        INDEX_NAME,
        build_collection_index(&config.project, documents.names()),
    );
    summary
        .written
        .extend(write_rst_documents(&macros_dir, &collection_index)?);

    log::info!("====== Finished creating documentation ======");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_document_name() {
        assert_eq!(document_name(Path::new("foo.cmake")).unwrap(), "foo");
        assert_eq!(
            document_name(Path::new("cmake/ecbuild_add_test.cmake")).unwrap(),
            "ecbuild_add_test"
        );
        assert_eq!(document_name(Path::new("noext")).unwrap(), "noext");
        assert_eq!(document_name(Path::new("a/b.c.cmake")).unwrap(), "b.c");
        assert!(document_name(Path::new("..")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_document_name_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"macros/ecbuild_\xff.cmake"));
        let err = document_name(path).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_macro_name_aborts_run() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let macro_path = temp_dir
            .path()
            .join(OsStr::from_bytes(b"bad_\xfe.cmake"));
        fs::write(&macro_path, "# .rst:\n# text\n").unwrap();
        let source = temp_dir.path().join("out");

        let mut config = DocConfig::new(vec![macro_path]);
        config.source = source.clone();
        assert!(create_documentation(&config).is_err());
        assert!(!source.exists());
    }

    #[test]
    fn test_create_documentation_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let macro_path = temp_dir.path().join("foo.cmake");
        fs::write(&macro_path, "# .rst:\n# Description here\n").unwrap();
        let source = temp_dir.path().join("out");

        let mut config = DocConfig::new(vec![macro_path]);
        config.source = source.clone();
        let summary = create_documentation(&config).unwrap();

        assert_eq!(summary.documents, 1);
        assert_eq!(
            summary.written,
            vec![
                source.join("macros/foo.rst"),
                source.join("index.rst"),
                source.join("macros/index.rst"),
            ]
        );
        assert_eq!(
            fs::read_to_string(source.join("macros/foo.rst")).unwrap(),
            "Description here"
        );
        assert!(fs::read_to_string(source.join("macros/index.rst"))
            .unwrap()
            .contains("\tfoo.rst\n"));
        assert_eq!(
            fs::read_to_string(source.join("index.rst")).unwrap(),
            build_top_index("ecBuild")
        );
    }

    #[test]
    fn test_collection_follows_input_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut macros = Vec::new();
        for name in ["zeta", "alpha", "mid"] {
            let path = temp_dir.path().join(format!("{}.cmake", name));
            fs::write(&path, "").unwrap();
            macros.push(path);
        }

        let documents = collect_documents(&macros).unwrap();
        assert_eq!(documents.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(documents.get("alpha"), Some(""));
    }

    #[test]
    fn test_missing_macro_aborts_before_writing() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("present.cmake");
        fs::write(&present, "# .rst:\n# ok\n").unwrap();
        let source = temp_dir.path().join("out");

        let mut config = DocConfig::new(vec![present, temp_dir.path().join("missing.cmake")]);
        config.source = source.clone();
        let err = create_documentation(&config).unwrap_err();

        assert!(format!("{:#}", err).contains("Error opening file"));
        assert!(!source.exists());
    }
}
