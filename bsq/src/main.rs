use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use bsq::logging::init_logger;
use bsq::{BatchRunner, Source};
use clap::Parser;
use log::{error, info};

#[derive(Parser)]
#[command(
    about = "Find the biggest square of empty cells in each map",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Map files, read in order; standard input when none are given
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    init_logger(false);
    let cli = Cli::parse();
    let sources = Source::from_paths(cli.files);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut runner = BatchRunner::new(stdout.lock(), stderr.lock());

    match runner.run(&sources) {
        Ok(summary) => {
            info!(
                "{} of {} maps solved",
                summary.succeeded,
                summary.total()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
