use content::{Notice, NoticeKind, Role};
use policy::Action;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("permission denied: {role} '{actor}' can only {action} their own posts (post '{title}')")]
    PermissionDenied {
        role: Role,
        actor: String,
        action: Action,
        title: String,
    },

    #[error("post '{title}' not found among {actor}'s posts")]
    NotFound {
        role: Role,
        actor: String,
        title: String,
    },
}

impl Error {
    /// The failure notice reporting this error.
    pub fn notice(&self) -> Notice {
        let kind = match self {
            Error::PermissionDenied {
                role,
                actor,
                action,
                title,
            } => NoticeKind::PermissionDenied {
                role: *role,
                actor: actor.clone(),
                action: action.to_string(),
                title: title.clone(),
            },
            Error::NotFound { role, actor, title } => NoticeKind::NotFound {
                role: *role,
                actor: actor.clone(),
                title: title.clone(),
            },
        };
        Notice::new(kind)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
