use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use bash_printer::input::{self, InputError};
use bash_printer::{Config, PrintError};
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bash-printer")]
#[command(about = "Print a shell syntax tree back to source, keeping its layout")]
#[command(version)]
struct Cli {
    /// Serialized tree (.json, .yaml, .yml), or - for JSON on stdin
    #[arg()]
    tree: PathBuf,

    /// Spaces per indentation level (0 indents with tabs)
    #[arg(short = 'i', long = "indent")]
    indent: Option<usize>,

    /// TOML configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Compare the rendering with SOURCE and print a unified diff
    #[arg(short = 'd', long = "diff", value_name = "SOURCE")]
    diff: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Print(#[from] PrintError),
    #[error("cannot read {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let mut config = match &cli.config {
        Some(path) => input::load_config(path)?,
        None => Config::default(),
    };
    if let Some(spaces) = cli.indent {
        config.spaces = spaces;
    }
    let file = input::load_file(&cli.tree)?;
    tracing::debug!(tree = %cli.tree.display(), spaces = config.spaces, "loaded tree");

    let Some(source_path) = &cli.diff else {
        config.fprint(std::io::stdout().lock(), &file)?;
        return Ok(ExitCode::SUCCESS);
    };

    let source = std::fs::read_to_string(source_path).map_err(|source| CliError::Source {
        path: source_path.clone(),
        source,
    })?;
    let printed = config.sprint(&file)?;
    if printed == source {
        return Ok(ExitCode::SUCCESS);
    }
    let diff = TextDiff::from_lines(&source, &printed);
    let original = source_path.display().to_string();
    let mut stdout = std::io::stdout().lock();
    write!(
        stdout,
        "{}",
        diff.unified_diff().header(&original, "printed")
    )?;
    Ok(ExitCode::from(1))
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("bash-printer: {}", e);
            ExitCode::from(2)
        }
    }
}
