//! Workspace introspection.

pub mod workspace;

pub use workspace::{member_manifests, workspace_members};
