pub mod run;

use crate::config::{Dialect, DEFAULT_REPORTS_DIR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prlint")]
#[command(
    author,
    version,
    about = "Reformats design lint reports into PR comments for CI"
)]
pub struct Cli {
    /// Directory containing lint-report.json / lint-report.md
    #[arg(value_name = "REPORTS_DIR", default_value = DEFAULT_REPORTS_DIR)]
    pub reports_dir: PathBuf,

    /// Where to write the PR comment (default: <REPORTS_DIR>/pr-comment.md)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Assume a specific markdown dialect instead of trying both
    #[arg(long, value_enum)]
    pub dialect: Option<Dialect>,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
