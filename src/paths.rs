//! # Resource Path Resolution
//!
//! Maps each concrete resource to its on-disk location, honoring
//! environment overrides before falling back to documented defaults under
//! the user profile. Resolution is pure over an [`EnvSnapshot`] captured
//! once per invocation, and it never fails: every resource has some
//! deterministic path even on a machine with no overrides configured.
//!
//! Platform differences are confined to this module: Windows names its
//! temp directory via `TMP`/`TEMP` while POSIX systems use `TMPDIR`.

use std::path::PathBuf;

use crate::resource::ResourceName;

/// Environment override for the global packages folder.
pub const ENV_GLOBAL_PACKAGES: &str = "NUGET_PACKAGES";

/// Environment override for the HTTP cache folder.
pub const ENV_HTTP_CACHE: &str = "NUGET_HTTP_CACHE_PATH";

/// Subdirectory of the temp folder used as scratch space.
const SCRATCH_DIR_NAME: &str = "NuGetScratch";

/// A resolved resource location. The path is not required to exist;
/// absence is a valid state for both list and clear.
#[derive(Debug, Clone)]
pub struct ResourceLocation {
    /// The concrete resource this path belongs to.
    pub resource: ResourceName,
    /// The directory holding the resource's content.
    pub path: PathBuf,
}

/// The environment values resolution depends on, captured up front so
/// resolution itself is a pure function (and so tests can construct a
/// snapshot without touching process-global state).
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    /// Value of [`ENV_GLOBAL_PACKAGES`], if set.
    pub global_packages: Option<String>,
    /// Value of [`ENV_HTTP_CACHE`], if set.
    pub http_cache: Option<String>,
    /// Value of the platform temp variable (`TMP`/`TEMP` or `TMPDIR`), if set.
    pub temp: Option<String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_env() -> Self {
        EnvSnapshot {
            global_packages: std::env::var(ENV_GLOBAL_PACKAGES).ok(),
            http_cache: std::env::var(ENV_HTTP_CACHE).ok(),
            temp: platform_temp_var(),
        }
    }
}

/// Read the platform's temp-directory variable. Windows consults `TMP`
/// then `TEMP`; everything else uses `TMPDIR`.
fn platform_temp_var() -> Option<String> {
    if cfg!(windows) {
        std::env::var("TMP").or_else(|_| std::env::var("TEMP")).ok()
    } else {
        std::env::var("TMPDIR").ok()
    }
}

/// Resolves resource names to filesystem locations.
#[derive(Debug)]
pub struct PathResolver {
    env: EnvSnapshot,
}

impl PathResolver {
    /// Build a resolver over a captured environment snapshot.
    pub fn new(env: EnvSnapshot) -> Self {
        PathResolver { env }
    }

    /// Build a resolver over the current process environment.
    pub fn from_env() -> Self {
        PathResolver::new(EnvSnapshot::from_env())
    }

    /// Resolve a concrete resource to its location.
    ///
    /// Precedence per resource:
    /// - `global-packages`: `NUGET_PACKAGES` if set and non-empty,
    ///   else `<home>/.nuget/packages`.
    /// - `http-cache`: `NUGET_HTTP_CACHE_PATH` if set,
    ///   else `<local-data>/NuGet/v3-cache`.
    /// - `temp`: platform temp variable (else the platform temp default),
    ///   joined with the fixed `NuGetScratch` subdirectory.
    ///
    /// `all` is expanded by the catalog before resolution and is not a
    /// valid argument here.
    pub fn resolve(&self, resource: ResourceName) -> ResourceLocation {
        debug_assert!(resource != ResourceName::All);
        let path = match resource {
            ResourceName::GlobalPackages => self.global_packages_path(),
            ResourceName::HttpCache => self.http_cache_path(),
            ResourceName::Temp | ResourceName::All => self.temp_scratch_path(),
        };
        ResourceLocation { resource, path }
    }

    fn global_packages_path(&self) -> PathBuf {
        match self.env.global_packages.as_deref() {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".nuget")
                .join("packages"),
        }
    }

    fn http_cache_path(&self) -> PathBuf {
        match self.env.http_cache.as_deref() {
            Some(value) => PathBuf::from(value),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("NuGet")
                .join("v3-cache"),
        }
    }

    fn temp_scratch_path(&self) -> PathBuf {
        let base = match self.env.temp.as_deref() {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => std::env::temp_dir(),
        };
        base.join(SCRATCH_DIR_NAME)
    }
}
