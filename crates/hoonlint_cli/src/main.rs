//! `hoonlint`: reads one source file, walks it for whitespace-shape
//! mistakes, and prints them in the windowed format the renderer describes.
//! Grammar and parsing are out of this repo's scope; `frontend` stands in
//! for the real parser a deployment would plug in here.

mod error;
mod frontend;
mod opts;
mod render;

use std::path::Path;
use std::process::ExitCode;

use hoonlint_core::Filter;
use hoonlint_syntax::SourceBuffer;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::opts::Opt;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadFile { path: path.to_path_buf(), source })
}

fn load_filter(opt: &Opt, file_name: &str) -> Result<Filter, CliError> {
    let mut filter = Filter::new();

    let default_suppressions = std::path::PathBuf::from("suppressions");
    let suppression_paths: Vec<&std::path::Path> = if opt.suppressions_file.is_empty() {
        if default_suppressions.exists() {
            vec![default_suppressions.as_path()]
        } else {
            Vec::new()
        }
    } else {
        opt.suppressions_file.iter().map(|p| p.as_path()).collect()
    };

    for path in suppression_paths {
        let text = read_file(path)?;
        filter.load_suppressions(&text, &path.display().to_string())?;
    }

    if let Some(path) = &opt.inclusions_file {
        let text = read_file(path)?;
        filter.load_inclusions(&text, &path.display().to_string())?;
    }

    let _ = file_name;
    Ok(filter)
}

fn run() -> Result<bool, CliError> {
    let opt = Opt::from_args_checked()?;
    init_tracing(opt.verbose);

    let file_name = opt.file.display().to_string();
    let text = read_file(&opt.file)?;
    let buf = SourceBuffer::new(text);
    let (tree, catalog) = frontend::build(&buf);

    let mut filter = load_filter(&opt, &file_name)?;
    let report = hoonlint_core::run(&file_name, &tree, &catalog, &buf, &mut filter, opt.census_whitespace);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    render::render(&mut handle, &report, &buf, opt.context).ok();

    let mut unused: Vec<_> = filter.unused_suppressions().collect();
    unused.sort_by_key(|tag| (tag.line, tag.column));
    for tag in &unused {
        tracing::warn!(file = %tag.file, line = tag.line, column = tag.column, "unused suppression");
        println!("Unused suppression: {} {}:{}", tag.kind.as_str(), tag.line, tag.column);
    }

    let clean = report.mistake_lines.is_empty();
    Ok(clean)
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("hoonlint: {}", err);
            ExitCode::from(2)
        }
    }
}
