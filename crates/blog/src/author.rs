//! Authors: authority over their own posts only.

use crate::manager::{self, PostManager};
use crate::{Error, Result};
use content::{Notice, Post, PostHandle, Role, User};

/// An author and the posts it has created, in creation order.
#[derive(Debug, Clone)]
pub struct Author {
    user: User,
    posts: Vec<PostHandle>,
}

impl Author {
    pub fn new(user: User) -> Self {
        Self {
            user,
            posts: Vec::new(),
        }
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub fn posts(&self) -> &[PostHandle] {
        &self.posts
    }

    /// Whether `post` is one of this author's posts (by identity).
    pub fn owns(&self, post: &PostHandle) -> bool {
        self.posts.iter().any(|p| p.ptr_eq(post))
    }
}

impl PostManager for Author {
    fn role(&self) -> Role {
        Role::Author
    }

    fn user(&self) -> &User {
        &self.user
    }

    fn create_post(&mut self, title: &str, content: &str) -> PostHandle {
        let post = PostHandle::new(Post::new(title, content, &self.user.name));
        self.posts.push(post.clone());
        manager::created(self.role(), &self.user, &post);
        post
    }

    /// Permitted iff the post's author name equals ours. Membership in
    /// `posts` is not required.
    fn edit_post(
        &mut self,
        post: &PostHandle,
        new_title: &str,
        new_content: &str,
    ) -> Result<Notice> {
        manager::edit(self.role(), &self.user, post, new_title, new_content)
    }

    /// Permitted iff the post's author name equals ours. A permitted post that
    /// is not in `posts` yields [`Error::NotFound`] and nothing is removed.
    fn delete_post(&mut self, post: &PostHandle) -> Result<Notice> {
        let title = manager::authorize_delete(self.role(), &self.user, post)?;

        let Some(index) = self.posts.iter().position(|p| p.ptr_eq(post)) else {
            tracing::warn!(actor = %self.user.name, %title, "post not in author's collection");
            return Err(Error::NotFound {
                role: self.role(),
                actor: self.user.name.clone(),
                title,
            });
        };

        self.posts.remove(index);
        Ok(manager::deleted(self.role(), &self.user, title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy::Action;

    fn jane() -> Author {
        Author::new(User::new("Jane", "jane@blog.com", "janepass"))
    }

    #[test]
    fn test_create_appends_in_order() {
        let mut jane = jane();
        let first = jane.create_post("One", "a");
        let second = jane.create_post("Two", "b");
        assert_eq!(jane.posts().len(), 2);
        assert!(jane.posts()[0].ptr_eq(&first));
        assert!(jane.posts()[1].ptr_eq(&second));
        assert_eq!(first.author(), "Jane");
    }

    #[test]
    fn test_edit_own_post() {
        let mut jane = jane();
        let post = jane.create_post("Mine", "x y");
        let notice = jane.edit_post(&post, "Still mine", "x y z").unwrap();
        assert_eq!(post.title(), "Still mine");
        assert_eq!(post.word_count(), 3);
        assert_eq!(notice.to_string(), "Post 'Still mine' edited by Author");
    }

    #[test]
    fn test_edit_other_post_denied() {
        let mut jane = jane();
        let post = PostHandle::new(Post::new("Theirs", "a b", "Bob"));
        let err = jane.edit_post(&post, "Hijacked", "z").unwrap_err();
        assert!(matches!(
            err,
            Error::PermissionDenied {
                action: Action::Edit,
                ..
            }
        ));
        assert_eq!(post.snapshot(), Post::new("Theirs", "a b", "Bob"));
        let notice = err.notice();
        assert!(!notice.is_success());
        assert!(notice.to_string().contains("edit your own posts"));
    }

    #[test]
    fn test_edit_matching_name_outside_collection() {
        let mut jane = jane();
        let post = PostHandle::new(Post::new("Loose", "a", "Jane"));
        assert!(jane.edit_post(&post, "Edited", "b").is_ok());
        assert_eq!(post.title(), "Edited");
        assert!(!jane.owns(&post));
    }

    #[test]
    fn test_delete_own_post() {
        let mut jane = jane();
        let keep = jane.create_post("Keep", "a");
        let post = jane.create_post("Mine", "x y");
        let notice = jane.delete_post(&post).unwrap();
        assert_eq!(notice.to_string(), "Author deleted their post: Mine");
        assert!(!jane.owns(&post));
        assert!(jane.owns(&keep));
        assert_eq!(jane.posts().len(), 1);
    }

    #[test]
    fn test_delete_other_post_denied() {
        let mut jane = jane();
        jane.create_post("Mine", "x");
        let post = PostHandle::new(Post::new("Theirs", "a", "Bob"));
        let err = jane.delete_post(&post).unwrap_err();
        assert!(matches!(
            err,
            Error::PermissionDenied {
                action: Action::Delete,
                ..
            }
        ));
        assert_eq!(jane.posts().len(), 1);
    }

    #[test]
    fn test_delete_twice_not_found() {
        let mut jane = jane();
        let post = jane.create_post("Mine", "x");
        jane.delete_post(&post).unwrap();
        let err = jane.delete_post(&post).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_delete_same_name_other_instance_not_found() {
        let mut jane = jane();
        let mut other_jane = Author::new(User::new("Jane", "jane2@blog.com", "x"));
        let post = other_jane.create_post("Theirs", "a");
        let err = jane.delete_post(&post).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert!(other_jane.owns(&post));
        assert!(err.notice().to_string().contains("not found"));
    }

    #[test]
    fn test_password_change_through_role() {
        let mut jane = jane();
        jane.user_mut().set_password("changed");
        assert_eq!(jane.user().password(), "changed");
    }
}
