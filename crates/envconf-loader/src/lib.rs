//! Settings file loading for envconf
//!
//! This crate is the fallible half of envconf: it expands file patterns,
//! classifies files by extension, renders `${VAR}` templates, parses YAML,
//! and applies the resolved settings to a [`SettingsStore`]. The
//! environment-narrowing itself lives in `envconf-core`.
//!
//! ```text
//!   patterns ──► glob ──► classify ──► read/render ──► parse ──► resolve ──► store
//! ```
//!
//! Loading is a one-shot, startup-time operation: files are processed
//! sequentially, later files win on key collision, and the first error
//! aborts the batch.

pub mod error;
pub mod loader;
pub mod source;
pub mod template;

pub use error::{Error, Result};
pub use loader::ConfigLoader;
pub use source::SourceKind;

pub use envconf_core::{Environments, IndifferentMap, Setting, SettingsStore, Sym};
