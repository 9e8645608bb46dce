use clap::Parser;
use std::process::ExitCode;
use tinct::app;
use tinct::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match app::run(&cli) {
        Ok(outcome) => {
            if !outcome.output.is_empty() {
                println!("{}", outcome.output);
            }
            if outcome.complete {
                ExitCode::SUCCESS
            } else {
                log::warn!("Some overlay toggles were rejected");
                ExitCode::from(2)
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
