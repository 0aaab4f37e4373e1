//! # `locals` Subcommand Boundary
//!
//! Captures the raw tokens of a `locals` invocation, runs them through
//! validation and the engine, and renders results. The error lines
//! printed here are a compatibility contract: tooling matches them
//! verbatim, so clap's own flag handling is bypassed and every token
//! reaches the validator untouched.

use clap::Args;
use colored::Colorize;
use std::process::ExitCode;

use crate::engine::LocalsEngine;
use crate::paths::PathResolver;
use crate::validate::{self, LocalsRequest, ValidationError, HELP_URL, USAGE};

/// Arguments for the `nuget locals` subcommand.
#[derive(Args)]
#[command(
    override_usage = "nuget locals <all | http-cache | global-packages | temp> [--clear | -c | --list | -l]",
    disable_help_flag = true
)]
pub struct LocalsArgs {
    /// Resource selector and operation flag, in either order.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    args: Vec<String>,
}

/// Runs the `locals` command.
///
/// Successful list/clear invocations print nothing and exit zero.
/// Validation and per-resource execution failures go to stderr.
pub fn run(args: LocalsArgs) -> ExitCode {
    let request = match validate::validate(&args.args) {
        Ok(request) => request,
        Err(error) => {
            print_validation_error(&error);
            return ExitCode::FAILURE;
        }
    };

    let request = match request {
        LocalsRequest::Help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        LocalsRequest::Operate(request) => request,
    };

    let engine = LocalsEngine::new(PathResolver::from_env());
    let result = engine.execute(request);

    for failure in result.failures() {
        let cause = failure.detail.as_deref().unwrap_or("unknown cause");
        error_line(&format!(
            "Clearing the {} folder at {} failed: {}",
            failure.resource,
            failure.path.display(),
            cause
        ));
    }

    if result.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_validation_error(error: &ValidationError) {
    match error {
        ValidationError::UnrecognizedOption(_) => {
            // The hint line carries no `error:` prefix in the reference client.
            eprintln!("Specify --help for a list of available options and commands.");
            error_line(&error.to_string());
        }
        ValidationError::MissingArguments | ValidationError::AmbiguousOrMissingOperation => {
            error_line(&error.to_string());
            error_line(&format!("For more information, visit {HELP_URL}"));
        }
        ValidationError::UnknownResource => {
            error_line(&error.to_string());
        }
    }
}

fn error_line(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}
