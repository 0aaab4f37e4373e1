//! # Locals Engine
//!
//! Drives a validated request through resolution and execution: the
//! catalog expands the selector, the resolver produces a location per
//! concrete resource, and the selected operation runs once per location
//! in catalog order. Resources are independent; one failure never stops
//! the others, so a `clear all` always reports exactly which resource
//! could not be cleared.

use crate::ops::{self, OperationOutcome, OutcomeStatus};
use crate::paths::PathResolver;
use crate::validate::{Operation, OperationRequest};

/// One outcome per concrete resource touched by a request.
#[derive(Debug)]
pub struct AggregatedResult {
    /// Outcomes in catalog order.
    pub outcomes: Vec<OperationOutcome>,
}

impl AggregatedResult {
    /// Overall success: every outcome `Succeeded` or `NotFound`.
    pub fn succeeded(&self) -> bool {
        self.outcomes
            .iter()
            .all(|outcome| outcome.status != OutcomeStatus::Failed)
    }

    /// The outcomes that actually failed, for boundary reporting.
    pub fn failures(&self) -> impl Iterator<Item = &OperationOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == OutcomeStatus::Failed)
    }
}

/// Executes validated requests against resolved resource locations.
#[derive(Debug)]
pub struct LocalsEngine {
    resolver: PathResolver,
}

impl LocalsEngine {
    /// Build an engine over the given resolver.
    pub fn new(resolver: PathResolver) -> Self {
        LocalsEngine { resolver }
    }

    /// Run the request against every concrete resource it selects,
    /// sequentially and independently, and aggregate the outcomes.
    pub fn execute(&self, request: OperationRequest) -> AggregatedResult {
        let outcomes = request
            .resource
            .expand()
            .iter()
            .map(|&resource| {
                let location = self.resolver.resolve(resource);
                match request.operation {
                    Operation::List => ops::list(location),
                    Operation::Clear => ops::clear(location),
                }
            })
            .collect();
        AggregatedResult { outcomes }
    }
}
