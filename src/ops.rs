//! # List and Clear Operations
//!
//! The two actions that can be applied to a resolved resource location.
//! Both treat a missing directory as `NotFound`, a valid non-error state,
//! which is what makes repeated clears idempotent from the caller's view.

use anyhow::Context;
use std::fs;
use std::path::PathBuf;

use crate::paths::ResourceLocation;
use crate::resource::ResourceName;

/// How a single resource operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// The operation completed.
    Succeeded,
    /// The resource directory does not exist. Not an error.
    NotFound,
    /// The operation could not complete; `detail` carries the cause.
    Failed,
}

/// Per-resource result, consumed immediately by the aggregator.
#[derive(Debug)]
pub struct OperationOutcome {
    /// The resource the operation acted on.
    pub resource: ResourceName,
    /// The resolved directory.
    pub path: PathBuf,
    /// How the operation ended.
    pub status: OutcomeStatus,
    /// Underlying cause, present only for `Failed`.
    pub detail: Option<String>,
}

/// Report whether the resource directory exists. Read-only; no content
/// enumeration is performed beyond the existence check.
pub fn list(location: ResourceLocation) -> OperationOutcome {
    let status = if location.path.is_dir() {
        OutcomeStatus::Succeeded
    } else {
        OutcomeStatus::NotFound
    };
    OperationOutcome {
        resource: location.resource,
        path: location.path,
        status,
        detail: None,
    }
}

/// Recursively delete the resource directory and everything under it.
///
/// Succeeds only if the directory is gone afterward. Partial deletion
/// (a locked or unwritable entry) is reported as `Failed` with the
/// underlying cause; no rollback is attempted.
pub fn clear(location: ResourceLocation) -> OperationOutcome {
    let ResourceLocation { resource, path } = location;

    if !path.exists() {
        return OperationOutcome {
            resource,
            path,
            status: OutcomeStatus::NotFound,
            detail: None,
        };
    }

    let removed = fs::remove_dir_all(&path)
        .with_context(|| format!("Failed to remove {}", path.display()))
        .and_then(|()| {
            if path.exists() {
                anyhow::bail!("{} still exists after removal", path.display());
            }
            Ok(())
        });

    match removed {
        Ok(()) => OperationOutcome {
            resource,
            path,
            status: OutcomeStatus::Succeeded,
            detail: None,
        },
        Err(cause) => OperationOutcome {
            resource,
            path,
            status: OutcomeStatus::Failed,
            detail: Some(format!("{cause:#}")),
        },
    }
}
