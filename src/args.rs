use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};

/// Tierlog: walk every logger operation once against a chosen threshold.
///
/// Each message carries a level from 1 to 6; only those at or below
/// --level are printed. File lines go to --log-file.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Logger threshold; calls with a higher level are suppressed
    #[arg(long = "level", default_value_t = 7, allow_negative_numbers = true)]
    pub level: i32,

    /// File that log lines are appended to
    #[arg(long = "log-file", default_value = "tierlog.log")]
    pub log_file: PathBuf,

    /// Disable ANSI colors on console output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Diagnostics verbosity on stderr: 0=warn, 1=info, 2=debug
    #[arg(long = "trace-verbosity", default_value_t = 0)]
    pub trace_verbosity: u8,

    /// Print the fatal signal and carry on instead of exiting non-zero
    #[arg(long = "skip-fatal", action = ArgAction::SetTrue)]
    pub skip_fatal: bool,
}

impl Args {
    /// Range checks clap can't express on the fields.
    fn validate(&self) -> anyhow::Result<()> {
        if self.trace_verbosity > 2 {
            anyhow::bail!("--trace-verbosity must be in 0..=2");
        }
        Ok(())
    }
}

/// Parse argv, reporting validation failures through clap's own error
/// formatting (usage line, exit code 2).
pub fn parse() -> Args {
    let args = Args::parse();
    if let Err(e) = args.validate() {
        Args::command().error(ErrorKind::ValueValidation, e).exit();
    }
    args
}
