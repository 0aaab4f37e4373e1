//! # Local Resource Catalog
//!
//! The fixed registry of local resources managed by `nuget locals`: the
//! HTTP response cache, the global packages folder, the scratch/temp
//! directory, and the aggregate selector `all`. The set is closed; any
//! other name is rejected during validation and never reaches resolution.

use std::fmt;

/// A named local resource, or the aggregate selector `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceName {
    /// On-disk cache of downloaded HTTP responses.
    HttpCache,
    /// The global packages folder shared across projects.
    GlobalPackages,
    /// The scratch directory used during package operations.
    Temp,
    /// All three concrete resources.
    All,
}

/// Expansion of `all`, in the order resources are processed.
static ALL_RESOURCES: [ResourceName; 3] = [
    ResourceName::HttpCache,
    ResourceName::GlobalPackages,
    ResourceName::Temp,
];

impl ResourceName {
    /// Parse a command-line resource token. Matching is case-sensitive
    /// and exact; `None` means the token is not a known resource.
    pub fn parse(token: &str) -> Option<ResourceName> {
        match token {
            "http-cache" => Some(ResourceName::HttpCache),
            "global-packages" => Some(ResourceName::GlobalPackages),
            "temp" => Some(ResourceName::Temp),
            "all" => Some(ResourceName::All),
            _ => None,
        }
    }

    /// Expand the selector into concrete resources: identity for the
    /// three concrete names, the full catalog for `all`. `All` itself is
    /// never a target of path resolution.
    pub fn expand(self) -> &'static [ResourceName] {
        match self {
            ResourceName::HttpCache => &ALL_RESOURCES[0..1],
            ResourceName::GlobalPackages => &ALL_RESOURCES[1..2],
            ResourceName::Temp => &ALL_RESOURCES[2..3],
            ResourceName::All => &ALL_RESOURCES,
        }
    }

    /// The command-line token for this resource.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceName::HttpCache => "http-cache",
            ResourceName::GlobalPackages => "global-packages",
            ResourceName::Temp => "temp",
            ResourceName::All => "all",
        }
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
