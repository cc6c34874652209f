// crates/build_index_pages/src/lib.rs

use rst_marker::{rst_file_name, INDEX_NAME, MACROS_DIR};

/// Depth of every generated `toctree`.
const TOCTREE_MAXDEPTH: u32 = 2;

/// Returns `title` between an overline and an underline of `#`, each as wide as the title.
pub fn banner(title: &str) -> String {
    let rule = "#".repeat(title.chars().count());
    format!("{rule}\n{title}\n{rule}\n")
}

fn toctree_header() -> String {
    format!(".. toctree::\n\t:maxdepth: {}\n\n", TOCTREE_MAXDEPTH)
}

/// Builds the root `index.rst`, which links to the macros collection index
/// and to the search page.
pub fn build_top_index(project: &str) -> String {
    let mut page = banner(&format!("{} Documentation", project));
    page.push('\n');
    page.push_str(&toctree_header());
    page.push_str(&format!(
        "\t{}/{}\n",
        MACROS_DIR,
        rst_file_name(INDEX_NAME)
    ));
    page.push('\n');
    page.push_str(&banner("Indices and tables"));
    page.push('\n');
    page.push_str("* :ref:`search`\n");
    page
}

/// Builds `macros/index.rst`: one toctree entry per document name, in the given order.
///
/// Names are neither sorted nor deduplicated.
pub fn build_collection_index<I, S>(project: &str, names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut page = banner(&format!("{} macros", project));
    page.push_str(&toctree_header());
    for name in names {
        page.push('\t');
        page.push_str(&rst_file_name(name.as_ref()));
        page.push('\n');
    }
    page
}
