//! scorekeeper: load the session file, run one command, save if it changed.

use std::process::ExitCode;

use clap::Parser;
use scorekeeper::cli::Cli;
use scorekeeper::{run, telemetry, AppError, Config, SessionStore};
use tracing::{debug, error};

fn execute(cli: &Cli, config: &Config) -> Result<String, AppError> {
    let store = SessionStore::new(&config.state_file);
    let mut session = store.load()?;
    let outcome = run(&cli.command, &mut session, cli.json)?;
    if outcome.changed {
        store.save(&session)?;
    }
    debug!(changed = outcome.changed, path = %store.path().display(), "command finished");
    Ok(outcome.output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config.with_state_file(cli.state_file.clone()),
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(AppError::from(err).exit_code());
        }
    };
    telemetry::init_tracing(cli.verbose, config.log_json);

    match execute(&cli, &config) {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "command failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
