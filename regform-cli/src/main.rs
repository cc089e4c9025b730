mod commands;
mod logging;
mod paths;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use regform_lib::forms::FormKind;

/// Fill in, validate and submit registration forms.
#[derive(Debug, Parser)]
#[command(name = "regform", version)]
pub struct Cli {
    /// Database file for persisted forms.
    #[arg(long, env = "REGFORM_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a form's fields and rules.
    Fields {
        form: FormKind,
    },
    /// Fill in a form and submit it.
    Submit {
        form: FormKind,
        /// Field value as `name=value`. Repeatable.
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        values: Vec<(String, String)>,
        /// Skip the write when the values equal the saved ones.
        #[arg(long)]
        dedup: bool,
    },
    /// Print a form's saved values.
    Show {
        form: FormKind,
    },
    /// Delete a form's saved values.
    Clear {
        form: FormKind,
    },
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))
}

/// Logging is best effort: a failure is reported and the command still runs.
fn init_logging(verbose: bool) {
    let Some(dir) = paths::log_dir() else {
        eprintln!("Warning: no cache directory found; logging disabled");
        return;
    };
    if let Err(e) = logging::init(&dir, verbose) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
