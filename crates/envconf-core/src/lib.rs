//! Environment-scoped settings resolution
//!
//! This crate implements the pure half of the envconf loader: given a YAML
//! mapping parsed from a settings file, a current environment name, and the
//! list of recognized environment names, it narrows the tree to the entries
//! that apply to the current environment.
//!
//! Two scoping styles are supported:
//!
//! - **File-level**: the document's top-level keys are environment names and
//!   the whole file is organized per environment.
//! - **Key-level**: individual values are mappings keyed by environment name
//!   and are narrowed in place.
//!
//! Resolution is a pure transform; all I/O lives in `envconf-loader`.
//!
//! # Example
//!
//! ```
//! use envconf_core::{resolve, Environments, Sym};
//!
//! let tree: serde_yaml::Mapping = serde_yaml::from_str(
//!     "greeting:\n  development: hi\n  production: hello\nretries: 3\n",
//! )
//! .unwrap();
//!
//! let settings = resolve(tree, "production", &Environments::default());
//! assert_eq!(settings.get("greeting").unwrap().as_str(), Some("hello"));
//! assert_eq!(settings.get(Sym("retries")).unwrap().as_i64(), Some(3));
//! ```

pub mod environments;
pub mod indifferent;
pub mod resolver;
pub mod setting;
pub mod store;

pub use environments::Environments;
pub use indifferent::{IndifferentMap, SettingKey, Sym};
pub use resolver::{is_environment_rooted, resolve};
pub use setting::Setting;
pub use store::SettingsStore;
