use std::path::PathBuf;

use clap::Parser;
use form_core::FilterName;

use super::config::DEFAULT_CONFIG_FILE;

/// Submit JSON to the form endpoint and filter the response fields.
#[derive(Debug, Parser)]
#[command(name = "form_app", version)]
pub struct Cli {
    /// Submit the JSON in this file once and print the result (`-` reads stdin).
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Field to display with --input: Numbers, Alphabets or "Highest Alphabet".
    #[arg(long = "filter", value_name = "NAME")]
    pub filters: Vec<FilterName>,

    /// RON configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}
