use content::Role;
use std::fmt;

/// Mutations an actor can request on an existing post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Edit,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Edit => write!(f, "edit"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

/// A permission request: `actor`, playing `role`, wants to perform `action`
/// on a post whose ownership key is `post_author`.
#[derive(Debug, Clone)]
pub struct PermissionRequest {
    pub action: Action,
    pub role: Role,
    pub actor: String,
    pub post_author: String,
}

impl PermissionRequest {
    pub fn new(
        action: Action,
        role: Role,
        actor: impl Into<String>,
        post_author: impl Into<String>,
    ) -> Self {
        Self {
            action,
            role,
            actor: actor.into(),
            post_author: post_author.into(),
        }
    }

    pub fn edit(role: Role, actor: impl Into<String>, post_author: impl Into<String>) -> Self {
        Self::new(Action::Edit, role, actor, post_author)
    }

    pub fn delete(role: Role, actor: impl Into<String>, post_author: impl Into<String>) -> Self {
        Self::new(Action::Delete, role, actor, post_author)
    }
}
