//! Lookup index over the academic hierarchy.

use std::collections::HashMap;

use culinaria_shared::types::{CycleId, GroupId, ModuleId, TeacherId};
use serde::{Deserialize, Serialize};

use super::types::{Assignment, Cycle, Group, Module};

/// Ids a group id rolls up to.
///
/// Each parent id is the one carried by an existing child, whether or not the
/// parent itself exists. A missing group has no module; a missing module has
/// no cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyPath {
    /// The group id, resolved or not.
    pub group: GroupId,
    /// `module_id` of the group, if the group exists.
    pub module: Option<ModuleId>,
    /// `cycle_id` of the module, if the module exists.
    pub cycle: Option<CycleId>,
}

/// Borrowed index over cycles, modules, groups and assignments.
///
/// Duplicate ids keep the first occurrence.
#[derive(Debug, Default)]
pub struct AcademicHierarchy<'a> {
    cycles: HashMap<CycleId, &'a Cycle>,
    modules: HashMap<ModuleId, &'a Module>,
    groups: HashMap<GroupId, &'a Group>,
    assigned: HashMap<TeacherId, Vec<GroupId>>,
}

impl<'a> AcademicHierarchy<'a> {
    /// Builds the index.
    #[must_use]
    pub fn new(
        cycles: &'a [Cycle],
        modules: &'a [Module],
        groups: &'a [Group],
        assignments: &[Assignment],
    ) -> Self {
        let mut index = Self::default();

        for cycle in cycles {
            index.cycles.entry(cycle.id).or_insert(cycle);
        }
        for module in modules {
            index.modules.entry(module.id).or_insert(module);
        }
        for group in groups {
            index.groups.entry(group.id).or_insert(group);
        }
        for assignment in assignments {
            let groups = index.assigned.entry(assignment.professor_id).or_default();
            if !groups.contains(&assignment.group_id) {
                groups.push(assignment.group_id);
            }
        }

        index
    }

    /// Looks up a cycle.
    #[must_use]
    pub fn cycle(&self, id: CycleId) -> Option<&'a Cycle> {
        self.cycles.get(&id).copied()
    }

    /// Looks up a module.
    #[must_use]
    pub fn module(&self, id: ModuleId) -> Option<&'a Module> {
        self.modules.get(&id).copied()
    }

    /// Looks up a group.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&'a Group> {
        self.groups.get(&id).copied()
    }

    /// Returns the parent module of a group.
    #[must_use]
    pub fn module_of(&self, group: &Group) -> Option<&'a Module> {
        self.module(group.module_id)
    }

    /// Returns the parent cycle of a module.
    #[must_use]
    pub fn cycle_of(&self, module: &Module) -> Option<&'a Cycle> {
        self.cycle(module.cycle_id)
    }

    /// Distinct group ids assigned to a teacher, in assignment order.
    ///
    /// Ids that do not resolve to a group are included.
    #[must_use]
    pub fn assigned_groups(&self, teacher: TeacherId) -> &[GroupId] {
        self.assigned
            .get(&teacher)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Walks a group id up the hierarchy, one parent reference per level.
    #[must_use]
    pub fn resolve_path(&self, group_id: GroupId) -> HierarchyPath {
        let module = self.group(group_id).map(|group| group.module_id);
        let cycle = module
            .and_then(|id| self.module(id))
            .map(|module| module.cycle_id);

        HierarchyPath {
            group: group_id,
            module,
            cycle,
        }
    }
}
