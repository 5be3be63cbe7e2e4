//! Notifications emitted by post operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The role an actor plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    Author,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Administrator => write!(f, "Admin"),
            Role::Author => write!(f, "Author"),
        }
    }
}

/// What a notice reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoticeKind {
    PostEdited {
        role: Role,
        actor: String,
        title: String,
    },
    PostDeleted {
        role: Role,
        actor: String,
        title: String,
    },
    /// The actor may not perform `action` on the post.
    PermissionDenied {
        role: Role,
        actor: String,
        action: String,
        title: String,
    },
    /// The post passed the ownership check but is not in the actor's collection.
    NotFound {
        role: Role,
        actor: String,
        title: String,
    },
}

/// A single notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self.kind,
            NoticeKind::PostEdited { .. } | NoticeKind::PostDeleted { .. }
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeKind::PostEdited { role, title, .. } => {
                write!(f, "Post '{title}' edited by {role}")
            }
            NoticeKind::PostDeleted {
                role: Role::Administrator,
                title,
                ..
            } => write!(f, "Admin deleted post: {title}"),
            NoticeKind::PostDeleted {
                role: Role::Author,
                title,
                ..
            } => write!(f, "Author deleted their post: {title}"),
            NoticeKind::PermissionDenied {
                role,
                actor,
                action,
                title,
            } => write!(
                f,
                "Error: You can only {action} your own posts. ({role} {actor} on '{title}')"
            ),
            NoticeKind::NotFound { role, actor, title } => {
                write!(f, "Error: Post '{title}' not found among {role} {actor}'s posts.")
            }
        }
    }
}
