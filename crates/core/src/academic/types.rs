//! Academic entity types.

use culinaria_shared::types::{CycleId, GroupId, ModuleId, TeacherId};
use serde::{Deserialize, Serialize};

/// A teaching cycle (top of the academic hierarchy).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    /// Cycle ID.
    pub id: CycleId,
    /// Cycle name.
    pub name: String,
    /// Optional short code (e.g. "HOT301").
    #[serde(default)]
    pub code: Option<String>,
}

/// A module taught within a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Module ID.
    pub id: ModuleId,
    /// Parent cycle.
    pub cycle_id: CycleId,
    /// Module name.
    pub name: String,
}

/// A student group; the leaf of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group ID.
    pub id: GroupId,
    /// Parent module.
    pub module_id: ModuleId,
    /// Group name.
    pub name: String,
}

/// A teacher who places orders and records sales.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Teacher ID.
    pub id: TeacherId,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
}

/// Edge between a teacher and a group they are responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Assigned teacher.
    pub professor_id: TeacherId,
    /// Group the teacher serves.
    pub group_id: GroupId,
}

impl Assignment {
    /// Creates an assignment edge.
    #[must_use]
    pub const fn new(professor_id: TeacherId, group_id: GroupId) -> Self {
        Self {
            professor_id,
            group_id,
        }
    }
}
