//! Environment-scoped narrowing of parsed settings trees
//!
//! A mapping is *environment-rooted* when at least one of its top-level
//! keys, stringified, names a recognized environment. One matching key is
//! enough; when a level is environment-rooted, only the branch for the
//! current environment survives and every sibling key at that level is
//! discarded. (The strict variant, which requires all keys to be
//! environment names and otherwise returns the mapping untouched, is
//! deliberately not implemented — see DESIGN.md.)

use crate::environments::Environments;
use crate::indifferent::IndifferentMap;
use crate::setting::{Setting, scalar_key};
use serde_yaml::{Mapping, Value};

/// Resolve a parsed settings tree against the current environment.
///
/// Two scoping styles apply, checked in order:
///
/// 1. **File-level**: `tree` itself is environment-rooted. The result is
///    the branch keyed by `environment`, flattened into settings. An
///    absent (or non-mapping) branch yields an empty result — the file
///    contributes nothing.
/// 2. **Key-level**: each top-level value that is itself an
///    environment-rooted mapping is narrowed to its branch for
///    `environment`; all other values pass through.
///
/// Entries whose resolved value is null, and entries whose branch for the
/// current environment is absent, are omitted from the result entirely.
/// Mapping values are wrapped for indifferent access.
///
/// This is a pure transform: missing environment branches are never an
/// error, and nothing is written anywhere.
///
/// # Example
///
/// ```
/// use envconf_core::{resolve, Environments};
///
/// let tree: serde_yaml::Mapping = serde_yaml::from_str(
///     "api_key:\n  development: dev-key\n  production: prod-key\ntimeout: 30\n",
/// )
/// .unwrap();
///
/// let settings = resolve(tree, "development", &Environments::default());
/// assert_eq!(settings.get("api_key").unwrap().as_str(), Some("dev-key"));
/// assert_eq!(settings.get("timeout").unwrap().as_i64(), Some(30));
/// ```
pub fn resolve(tree: Mapping, environment: &str, environments: &Environments) -> IndifferentMap {
    if is_environment_rooted(&tree, environments) {
        return match take_branch(tree, environment) {
            Some(Value::Mapping(branch)) => collect(branch),
            // Absent branch, or a branch that is not a mapping: the file
            // contributes no settings for this environment.
            _ => IndifferentMap::new(),
        };
    }

    let mut settings = IndifferentMap::new();
    for (key, value) in tree {
        let Some(name) = scalar_key(&key) else {
            tracing::warn!(?key, "skipping setting with non-scalar key");
            continue;
        };

        let resolved = match value {
            Value::Mapping(map) if is_environment_rooted(&map, environments) => {
                take_branch(map, environment)
            }
            other => Some(other),
        };

        match resolved {
            None | Some(Value::Null) => {}
            Some(value) => settings.insert(name, Setting::from(value)),
        }
    }
    settings
}

/// Whether a mapping's top-level keys include a recognized environment name.
///
/// Keys are stringified before comparison, so numeric or boolean keys can
/// match an environment named after their display form. A partial match is
/// sufficient: some keys being environments and some not still counts.
pub fn is_environment_rooted(mapping: &Mapping, environments: &Environments) -> bool {
    mapping
        .iter()
        .any(|(key, _)| scalar_key(key).is_some_and(|name| environments.contains(&name)))
}

/// Extract the value keyed by `environment`, comparing stringified keys.
fn take_branch(mapping: Mapping, environment: &str) -> Option<Value> {
    mapping
        .into_iter()
        .find_map(|(key, value)| (scalar_key(&key).as_deref() == Some(environment)).then_some(value))
}

/// Flatten an environment branch into settings, dropping null values and
/// entries with non-scalar keys.
fn collect(branch: Mapping) -> IndifferentMap {
    let mut settings = IndifferentMap::new();
    for (key, value) in branch {
        let Some(name) = scalar_key(&key) else {
            tracing::warn!(?key, "skipping setting with non-scalar key");
            continue;
        };
        if value.is_null() {
            continue;
        }
        settings.insert(name, Setting::from(value));
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn detects_environment_rooted_mappings() {
        let environments = Environments::default();

        assert!(is_environment_rooted(
            &mapping("production: {}\n"),
            &environments
        ));
        // Partial match counts.
        assert!(is_environment_rooted(
            &mapping("production: {}\nother: 1\n"),
            &environments
        ));
        assert!(!is_environment_rooted(
            &mapping("staging: {}\n"),
            &environments
        ));
        assert!(!is_environment_rooted(&Mapping::new(), &environments));
    }

    #[test]
    fn partial_rooting_discards_non_environment_siblings() {
        let tree = mapping("production:\n  a: 1\nextra: kept-nowhere\n");
        let settings = resolve(tree, "production", &Environments::default());

        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("a").unwrap().as_i64(), Some(1));
        assert!(settings.get("extra").is_none());
    }

    #[test]
    fn file_level_branch_that_is_not_a_mapping_is_empty() {
        let tree = mapping("production: just-a-string\n");
        let settings = resolve(tree, "production", &Environments::default());
        assert!(settings.is_empty());
    }

    #[test]
    fn file_level_null_values_are_dropped() {
        let tree = mapping("production:\n  a: 1\n  b: null\n");
        let settings = resolve(tree, "production", &Environments::default());

        assert_eq!(settings.len(), 1);
        assert!(settings.get("b").is_none());
    }

    #[test]
    fn key_level_null_values_are_dropped() {
        let tree = mapping("a: null\nb: 2\n");
        let settings = resolve(tree, "production", &Environments::default());

        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("b").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn unrecognized_environment_names_pass_through_as_mappings() {
        // "staging" is not recognized, so the value is a plain mapping.
        let tree = mapping("cache:\n  staging: enabled\n  ttl: 60\n");
        let settings = resolve(tree, "production", &Environments::default());

        let cache = settings.get("cache").unwrap().as_map().unwrap();
        assert_eq!(cache.get("ttl").unwrap().as_i64(), Some(60));
    }

    #[test]
    fn absent_branch_omits_the_key() {
        // Rooted via "production"; no "development" branch exists.
        let tree = mapping("cache:\n  staging: fast\n  production: slow\n");
        let settings = resolve(tree, "development", &Environments::default());
        assert!(settings.get("cache").is_none());
    }

    #[test]
    fn branch_lookup_is_plain_key_access() {
        // "staging" is not recognized, but once "production" roots the
        // value, any branch matching the current environment is selected.
        let tree = mapping("cache:\n  staging: fast\n  production: slow\n");
        let settings = resolve(tree, "staging", &Environments::default());
        assert_eq!(settings.get("cache").unwrap().as_str(), Some("fast"));
    }
}
