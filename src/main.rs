//! CLI entrypoint: prints the downstream pull requests declared in the
//! comments of one pull request.

mod cli;

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use downstream_prs::{DownstreamConfig, IntakeError};
use ortho_config::OrthoConfig;

use cli::args::split_command_line;

/// Exit status for command-line misuse.
const USAGE_EXIT_CODE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    cli::init_tracing();

    match run(env::args_os()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            if error.is_usage() {
                ExitCode::from(USAGE_EXIT_CODE)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run<I>(raw_args: I) -> Result<(), IntakeError>
where
    I: IntoIterator<Item = OsString>,
{
    let command_line = split_command_line(raw_args);
    if let Some(request) = command_line.info_request() {
        return cli::output::write_text(&request.text());
    }

    let number = command_line.pull_request_number()?;
    let config = load_config(command_line.into_flags())?;

    let dependencies = cli::extract::run(&config, number).await?;
    cli::output::write_dependencies(&dependencies)
}

/// Loads configuration from CLI flags, environment, and files.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config(flags: Vec<OsString>) -> Result<DownstreamConfig, IntakeError> {
    DownstreamConfig::load_from_iter(flags).map_err(|error| IntakeError::Configuration {
        message: error.to_string(),
    })
}
