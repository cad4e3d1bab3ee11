use std::process::ExitCode;

use clap::Parser;

use courier_cli::config::Config;

fn main() -> ExitCode {
    let config = Config::parse();

    courier_observability::init(config.log_format);

    match courier_cli::run(&config) {
        Ok(note) => {
            print!("{note}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let message = format!("{err:#}");
            tracing::error!(error = %message, "failed to render delivery note");
            eprintln!("courier-note: {message}");
            ExitCode::FAILURE
        }
    }
}
