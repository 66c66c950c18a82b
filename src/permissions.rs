//! Permission Lookup
//!
//! Capability strings granted to the signed-in user. These only decide which
//! controls are shown; the backend has to authorize every request itself.

use std::collections::HashSet;

pub const CREATE_PROJECT_MANAGERS: &str = "create project managers";
pub const EDIT_PROJECT_MANAGERS: &str = "edit project managers";
pub const DELETE_PROJECT_MANAGERS: &str = "delete project managers";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permissions {
    granted: HashSet<String>,
}

impl Permissions {
    pub fn new<I, S>(granted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            granted: granted
                .into_iter()
                .map(|p| normalize(p.as_ref()))
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Whether `capability` was granted. Case and surrounding whitespace are ignored.
    pub fn allows(&self, capability: &str) -> bool {
        self.granted.contains(&normalize(capability))
    }
}

fn normalize(capability: &str) -> String {
    capability.trim().to_lowercase()
}

/// Which row actions a caller may see in the managers table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerActions {
    pub edit: bool,
    pub delete: bool,
}

impl ManagerActions {
    pub fn for_permissions(perms: &Permissions) -> Self {
        Self {
            edit: perms.allows(EDIT_PROJECT_MANAGERS),
            delete: perms.allows(DELETE_PROJECT_MANAGERS),
        }
    }
}
