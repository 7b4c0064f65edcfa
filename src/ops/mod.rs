//! Manifest editing operations.

pub mod section;

pub use section::{EditOutcome, find_version_in_section, replace_version_in_section};
