//! Referral evaluation CLI: evaluates one referred purchase and prints the
//! outcome as JSON.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use referral_eval::{CliArgs, render_outcome, run};
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let result = run(&args).and_then(|outcome| {
        render_outcome(&outcome).map(|rendered| (outcome.success(), rendered))
    });

    match result {
        Ok((success, rendered)) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{rendered}") {
                drop(err);
                return ExitCode::FAILURE;
            }
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!(error = %err, "referral evaluation failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
