// crates/create_doc/src/config.rs

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rst_marker::DEFAULT_PROJECT;

pub const DEFAULT_LOGFILE: &str = "create_doc.log";
pub const DEFAULT_SOURCE: &str = "./_source";

/// Runtime configuration, composed from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocConfig {
    /// Macro files to document, in output order.
    pub macros: Vec<PathBuf>,
    /// Root directory of the generated Sphinx sources.
    pub source: PathBuf,
    /// Debug log destination.
    pub logfile: PathBuf,
    /// Title used in the index page banners.
    pub project: String,
}

impl DocConfig {
    /// Configuration for `macros` with every option at its default.
    pub fn new(macros: Vec<PathBuf>) -> Self {
        Self {
            macros,
            source: PathBuf::from(DEFAULT_SOURCE),
            logfile: PathBuf::from(DEFAULT_LOGFILE),
            project: DEFAULT_PROJECT.to_string(),
        }
    }

    /// Builds the configuration from matches of [`build_cli`], which
    /// guarantees at least one macro and a value for every option.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let path_or = |id: &str, default: &str| {
            matches
                .get_one::<PathBuf>(id)
                .cloned()
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            macros: matches
                .get_many::<PathBuf>("macro")
                .unwrap_or_default()
                .cloned()
                .collect(),
            source: path_or("source", DEFAULT_SOURCE),
            logfile: path_or("logfile", DEFAULT_LOGFILE),
            project: matches
                .get_one::<String>("project")
                .cloned()
                .unwrap_or_else(|| DEFAULT_PROJECT.to_string()),
        }
    }
}

/// Command-line definition of `create_doc`.
pub fn build_cli() -> Command {
    Command::new("create_doc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create documentation for a given list of ecBuild macros")
        .arg(
            Arg::new("logfile")
                .long("logfile")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_LOGFILE)
                .help("Path to log file"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_SOURCE)
                .help("Path to stage Sphinx .rst files"),
        )
        .arg(
            Arg::new("project")
                .long("project")
                .num_args(1)
                .default_value(DEFAULT_PROJECT)
                .help("Project name used in the index page titles"),
        )
        .arg(
            Arg::new("macro")
                .value_name("MACRO")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("List of paths to ecBuild macros"),
        )
}
