// crates/create_doc/src/main.rs

use anyhow::Result;
use create_doc::config::{build_cli, DocConfig};
use create_doc::create_documentation;
use create_doc::logging::init_logging;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = DocConfig::from_matches(&matches);

    init_logging(&config.logfile)?;

    let summary = create_documentation(&config)?;
    log::debug!(
        "Wrote {} file(s) for {} macro(s)",
        summary.written.len(),
        summary.documents
    );

    Ok(())
}
