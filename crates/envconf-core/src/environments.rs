//! Registry of recognized environment names
//!
//! The resolver treats a mapping as environment-rooted only when at least
//! one of its keys names a recognized environment. Hosts can extend or
//! replace the recognized set before loading runs (e.g. to add a `staging`
//! environment).

/// Environment names recognized out of the box.
pub const DEFAULT_ENVIRONMENTS: &[&str] = &["test", "production", "development"];

/// Ordered, duplicate-free list of recognized environment names.
///
/// The default set is `test`, `production`, `development`. The list is
/// mutable so the host can register additional environments before
/// resolution runs; for environment-scoped blocks to resolve as intended
/// the list must contain the current environment name (unscoped keys pass
/// through regardless).
///
/// # Example
///
/// ```
/// use envconf_core::Environments;
///
/// let mut environments = Environments::default();
/// environments.push("staging");
/// assert!(environments.contains("staging"));
/// assert!(environments.contains("production"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environments {
    names: Vec<String>,
}

impl Environments {
    /// Create an empty registry with no recognized environments.
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Create a registry from an ordered list of names.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut environments = Self::new();
        for name in names {
            environments.push(name);
        }
        environments
    }

    /// Append a name to the registry. No-op if already present.
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    /// Remove a name from the registry. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Whether `name` is a recognized environment.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Iterate over the names in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of recognized environments.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no environments are recognized.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Environments {
    fn default() -> Self {
        Self::from_names(DEFAULT_ENVIRONMENTS.iter().copied())
    }
}
