//! Command-line surface: a single derived `structopt` struct covering
//! every flag a run needs.

use std::path::PathBuf;

use structopt::StructOpt;

/// The only whitespace policy this linter knows how to run.
pub const SUPPORTED_POLICY: &str = "Test::Whitespace";

#[derive(Debug, StructOpt)]
#[structopt(name = "hoonlint", about = "A whitespace-shape linter for rune-prefixed source.")]
pub struct Opt {
    /// Raise the default log level from `warn` to `debug`. Reserved: does
    /// not otherwise change which mistakes are reported.
    #[structopt(long)]
    pub verbose: bool,

    /// Number of source lines of context to show around each topic line.
    #[structopt(short = "C", long = "context", default_value = "2")]
    pub context: usize,

    /// Emit suppressed mistakes too, marked with a `SUPPRESSION` prefix.
    #[structopt(long = "census-whitespace")]
    pub census_whitespace: bool,

    /// Restrict reported mistakes to the tags listed in this file.
    #[structopt(short = "I", long = "inclusions-file")]
    pub inclusions_file: Option<PathBuf>,

    /// A suppression file to load; repeatable. Defaults to `./suppressions`
    /// when present and no `-S` was given.
    #[structopt(short = "S", long = "suppressions_file")]
    pub suppressions_file: Vec<PathBuf>,

    /// The whitespace policy to run. Only `Test::Whitespace` exists.
    #[structopt(short = "P", long = "policy", default_value = SUPPORTED_POLICY)]
    pub policy: String,

    /// The source file to lint.
    pub file: PathBuf,
}

impl Opt {
    pub fn from_args_checked() -> Result<Self, crate::error::CliError> {
        let opt = Opt::from_args();
        if opt.policy != SUPPORTED_POLICY {
            return Err(crate::error::CliError::UnknownPolicy(opt.policy.clone()));
        }
        Ok(opt)
    }
}
