//! Permission enforcement.

use crate::PermissionRequest;
use content::Role;

/// The fixed role rules.
///
/// Administrators may edit or delete any post. Authors may edit or delete a
/// post only when its author name equals their own name exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Policy;

/// Result of a permission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: String },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

impl Policy {
    /// Check if a permission request is allowed.
    pub fn check(&self, request: &PermissionRequest) -> Decision {
        match request.role {
            Role::Administrator => Decision::Allow,
            // Ownership is by author name, not by collection membership
            Role::Author if request.post_author == request.actor => Decision::Allow,
            Role::Author => Decision::Deny {
                reason: format!(
                    "{} '{}' cannot {} a post by '{}'",
                    request.role, request.actor, request.action, request.post_author
                ),
            },
        }
    }
}
