//! Settings loading orchestration
//!
//! `ConfigLoader` is the registration hook: the host constructs it with the
//! current environment name, optionally adjusts the recognized environment
//! list, then points it at one or more file patterns. Each matched file is
//! classified, read (rendering templates), parsed, resolved against the
//! current environment, and merged into the settings store — sequentially,
//! with later files overriding earlier ones on key collision.
//!
//! Loading is fail-fast: the first error aborts the remainder of the batch.

use crate::source;
use crate::{Error, Result};
use envconf_core::{Environments, SettingsStore, resolve};
use std::path::{Path, PathBuf};

/// Loads environment-scoped settings files into a [`SettingsStore`].
///
/// # Example
///
/// ```no_run
/// use envconf_loader::ConfigLoader;
/// use envconf_core::SettingsStore;
///
/// # fn main() -> envconf_loader::Result<()> {
/// let mut store = SettingsStore::new();
/// let mut loader = ConfigLoader::new("production");
/// loader.environments_mut().push("staging");
///
/// loader.load_patterns(["config/settings/*.yml"], &mut store)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    environment: String,
    environments: Environments,
}

impl ConfigLoader {
    /// Create a loader for the given current environment, recognizing the
    /// default environment set.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            environments: Environments::default(),
        }
    }

    /// Create a loader with a custom recognized environment list.
    pub fn with_environments(environment: impl Into<String>, environments: Environments) -> Self {
        Self {
            environment: environment.into(),
            environments,
        }
    }

    /// The current environment name.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// The recognized environment list.
    pub fn environments(&self) -> &Environments {
        &self.environments
    }

    /// Mutable access to the recognized environment list, for host
    /// adjustment before loading runs.
    pub fn environments_mut(&mut self) -> &mut Environments {
        &mut self.environments
    }

    /// Load every file matched by the given glob patterns, in order.
    ///
    /// Patterns are expanded one at a time; each pattern's matches are
    /// processed in the expansion's (alphabetical) order. A pattern that
    /// matches nothing contributes nothing. The first error — unsupported
    /// file type, render failure, parse failure — aborts the whole batch,
    /// with no settings applied from the failing file; files already
    /// processed keep their settings in the store.
    pub fn load_patterns<I, S>(&self, patterns: I, store: &mut SettingsStore) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let matches = expand(pattern)?;
            if matches.is_empty() {
                tracing::debug!(pattern, "pattern matched no settings files");
            }
            for path in matches {
                self.load_file(&path, store)?;
            }
        }
        Ok(())
    }

    /// Load a single settings file into the store.
    pub fn load_file(&self, path: &Path, store: &mut SettingsStore) -> Result<()> {
        tracing::info!(
            path = %path.display(),
            environment = %self.environment,
            "loading settings file"
        );

        let kind = source::classify(path)?;
        let text = source::read(path, kind)?;
        let tree = source::parse_mapping(path, &text)?;

        let resolved = resolve(tree, &self.environment, &self.environments);
        tracing::debug!(
            path = %path.display(),
            settings = resolved.len(),
            "applying resolved settings"
        );
        store.merge(resolved);
        Ok(())
    }
}

/// Expand a glob pattern into matched paths.
fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| Error::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => matches.push(path),
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(Error::io(path, e.into_error()));
            }
        }
    }
    Ok(matches)
}
