//! The post management contract shared by every role.

use crate::{Error, Result};
use content::{Notice, NoticeKind, PostHandle, Role, User};
use policy::{Decision, PermissionRequest, Policy};

/// Create, edit and delete posts.
///
/// `edit_post` and `delete_post` never leave a post half-modified: on `Err`
/// the post is exactly as it was. Failures are ordinary values for the
/// caller to report; none of them is fatal.
pub trait PostManager {
    fn role(&self) -> Role;

    fn user(&self) -> &User;

    /// Create a post authored by this actor.
    fn create_post(&mut self, title: &str, content: &str) -> PostHandle;

    /// Overwrite a post's title and content.
    fn edit_post(&mut self, post: &PostHandle, new_title: &str, new_content: &str)
    -> Result<Notice>;

    /// Delete a post.
    fn delete_post(&mut self, post: &PostHandle) -> Result<Notice>;
}

/// Check `request` against the role rules, logging and returning an error if
/// denied.
pub(crate) fn require_permission(request: &PermissionRequest, title: &str) -> Result<()> {
    match Policy.check(request) {
        Decision::Allow => Ok(()),
        Decision::Deny { reason } => {
            tracing::warn!(
                role = %request.role,
                actor = %request.actor,
                action = %request.action,
                title,
                %reason,
                "permission denied"
            );
            Err(Error::PermissionDenied {
                role: request.role,
                actor: request.actor.clone(),
                action: request.action,
                title: title.to_string(),
            })
        }
    }
}

/// Authorize and apply an edit.
pub(crate) fn edit(
    role: Role,
    user: &User,
    post: &PostHandle,
    new_title: &str,
    new_content: &str,
) -> Result<Notice> {
    let title = post.title();
    let request = PermissionRequest::edit(role, &user.name, post.author());
    require_permission(&request, &title)?;
    post.overwrite(new_title, new_content);

    tracing::info!(%role, actor = %user.name, title = new_title, "post edited");
    Ok(Notice::new(NoticeKind::PostEdited {
        role,
        actor: user.name.clone(),
        title: new_title.to_string(),
    }))
}

/// Authorize a delete. Structural removal is up to the caller.
pub(crate) fn authorize_delete(role: Role, user: &User, post: &PostHandle) -> Result<String> {
    let title = post.title();
    let request = PermissionRequest::delete(role, &user.name, post.author());
    require_permission(&request, &title)?;
    Ok(title)
}

pub(crate) fn deleted(role: Role, user: &User, title: String) -> Notice {
    tracing::info!(%role, actor = %user.name, %title, "post deleted");
    Notice::new(NoticeKind::PostDeleted {
        role,
        actor: user.name.clone(),
        title,
    })
}

pub(crate) fn created(role: Role, user: &User, post: &PostHandle) {
    tracing::info!(%role, actor = %user.name, title = %post.title(), "post created");
}
