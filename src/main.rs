use std::process::ExitCode;

use clap::Parser;
use mazescape::app::{App, cli::Cli, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_dir.as_deref());

    match App::new(std::io::stdout()).run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
