//! Academic structure: cycles, modules, groups and teacher assignments.
//!
//! The hierarchy is a strict tree (group → module → cycle). Teachers hang off
//! groups through many-to-many assignment edges.

pub mod hierarchy;
pub mod types;

pub use hierarchy::{AcademicHierarchy, HierarchyPath};
pub use types::{Assignment, Cycle, Group, Module, Teacher};
