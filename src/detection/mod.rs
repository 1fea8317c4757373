//! Project root and output path detection.

pub mod conflicts;
pub mod project;

pub use conflicts::{remove_existing, resolve_conflict, ConflictResolution};
pub use project::{content_path, find_project_root, locate_root, CONTENT_DIR};
