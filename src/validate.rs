//! # Argument Validation
//!
//! Turns the raw tokens of a `locals` invocation into a validated
//! request, entirely before any filesystem access. The error messages
//! here are a compatibility contract and must match the reference client
//! byte for byte.
//!
//! When several problems coexist, exactly one error is surfaced. Checks
//! run in a fixed order: unrecognized option, then missing resource
//! token, then unknown resource name, then ambiguous or missing
//! operation flag.

use thiserror::Error;

use crate::resource::ResourceName;

/// Usage line shared by the missing-argument and missing-operation errors.
pub const USAGE: &str =
    "usage: NuGet locals <all | http-cache | global-packages | temp> [--clear | -c | --list | -l]";

/// Reference documentation pointed to after usage errors.
pub const HELP_URL: &str = "http://docs.nuget.org/docs/reference/command-line-reference";

/// The operation to perform on each resolved resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Report whether the resource directory exists. Read-only.
    List,
    /// Recursively delete the resource directory.
    Clear,
}

/// A validated `locals` request: one resource selector, one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRequest {
    /// The requested resource (possibly the aggregate `all`).
    pub resource: ResourceName,
    /// The requested operation.
    pub operation: Operation,
}

/// Outcome of validation: either run an operation, or print usage help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalsRequest {
    /// `--help`/`-h` was given; print usage and exit successfully.
    Help,
    /// A validated resource/operation pair.
    Operate(OperationRequest),
}

/// A rejected invocation. `Display` carries the exact message text shown
/// to the user (without the `error: ` prefix the boundary adds).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A flag token outside the recognized list/clear/help forms.
    #[error("Unrecognized option '{0}'")]
    UnrecognizedOption(String),

    /// No resource token was supplied (bare invocation, or flags only).
    #[error("{USAGE}")]
    MissingArguments,

    /// The resource token is not one of the four known names.
    #[error(
        "An invalid local resource name was provided. Please provide one of the following values: http-cache, temp, global-packages, all."
    )]
    UnknownResource,

    /// A resource was named but zero or both operation flags were given.
    #[error("{USAGE}")]
    AmbiguousOrMissingOperation,
}

/// Validate the raw tokens following the `locals` verb.
///
/// Both orderings are accepted: `<resource> <flag>` and `<flag> <resource>`.
///
/// # Errors
/// Returns the first failing check in the documented order.
pub fn validate(tokens: &[String]) -> Result<LocalsRequest, ValidationError> {
    let mut resource_token: Option<&str> = None;
    let mut extra_resource = false;
    let mut list = false;
    let mut clear = false;
    let mut help = false;

    for token in tokens {
        if token.starts_with('-') {
            match token.as_str() {
                "--list" | "-l" => list = true,
                "--clear" | "-c" => clear = true,
                "--help" | "-h" => help = true,
                other => return Err(ValidationError::UnrecognizedOption(other.to_string())),
            }
        } else if resource_token.is_none() {
            resource_token = Some(token);
        } else {
            // A second positional can never name a valid selector pair.
            extra_resource = true;
        }
    }

    if help {
        return Ok(LocalsRequest::Help);
    }

    let token = resource_token.ok_or(ValidationError::MissingArguments)?;
    if extra_resource {
        return Err(ValidationError::UnknownResource);
    }
    let resource = ResourceName::parse(token).ok_or(ValidationError::UnknownResource)?;

    let operation = match (list, clear) {
        (true, false) => Operation::List,
        (false, true) => Operation::Clear,
        _ => return Err(ValidationError::AmbiguousOrMissingOperation),
    };

    Ok(LocalsRequest::Operate(OperationRequest { resource, operation }))
}
