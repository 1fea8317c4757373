//! Tool settings.
//!
//! Settings come from an optional YAML file passed with `--config` (or the
//! `EIGHTSHIFT_CREATE_CONFIG` environment variable). Without one, the
//! defaults in [`Settings::default`] apply.
//!
//! # Example
//!
//! ```
//! use eightshift_create::config::{parse_settings, ConflictPolicy};
//! use std::path::Path;
//!
//! let settings = parse_settings("on_conflict: replace", Path::new("inline.yml")).unwrap();
//! assert_eq!(settings.on_conflict, ConflictPolicy::Replace);
//! assert_eq!(settings.clone_timeout, 45);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_settings, load_settings_file, parse_settings, validate};
pub use schema::{ConflictPolicy, RequirementCheckMode, Settings};
