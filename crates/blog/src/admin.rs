//! Administrators: unrestricted post authority.

use crate::manager::{self, PostManager};
use crate::Result;
use content::{Notice, Post, PostHandle, Role, User};

/// An administrator.
///
/// Keeps no collection of posts; it acts on whatever post it is handed.
#[derive(Debug, Clone)]
pub struct Administrator {
    user: User,
}

impl Administrator {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }
}

impl PostManager for Administrator {
    fn role(&self) -> Role {
        Role::Administrator
    }

    fn user(&self) -> &User {
        &self.user
    }

    fn create_post(&mut self, title: &str, content: &str) -> PostHandle {
        let post = PostHandle::new(Post::new(title, content, &self.user.name));
        manager::created(self.role(), &self.user, &post);
        post
    }

    fn edit_post(
        &mut self,
        post: &PostHandle,
        new_title: &str,
        new_content: &str,
    ) -> Result<Notice> {
        manager::edit(self.role(), &self.user, post, new_title, new_content)
    }

    /// Report the deletion. There is no registry to remove the post from;
    /// it goes away once the caller drops its handles.
    fn delete_post(&mut self, post: &PostHandle) -> Result<Notice> {
        let title = manager::authorize_delete(self.role(), &self.user, post)?;
        Ok(manager::deleted(self.role(), &self.user, title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::NoticeKind;

    fn admin() -> Administrator {
        Administrator::new(User::new("Admin User", "admin@blog.com", "adminpass"))
    }

    #[test]
    fn test_create_records_admin_as_author() {
        let mut admin = admin();
        let post = admin.create_post("Hello", "a b c");
        assert_eq!(post.author(), "Admin User");
        assert_eq!(post.word_count(), 3);
    }

    #[test]
    fn test_edit_any_post() {
        let mut admin = admin();
        let post = PostHandle::new(Post::new("Mine", "x y", "Jane"));
        let notice = admin.edit_post(&post, "Hi", "a b").unwrap();
        assert_eq!(post.title(), "Hi");
        assert_eq!(post.borrow().content, "a b");
        assert_eq!(post.author(), "Jane");
        assert_eq!(notice.to_string(), "Post 'Hi' edited by Admin");
    }

    #[test]
    fn test_delete_any_post() {
        let mut admin = admin();
        let post = PostHandle::new(Post::new("Mine", "x y", "Jane"));
        let notice = admin.delete_post(&post).unwrap();
        assert_eq!(
            notice.kind,
            NoticeKind::PostDeleted {
                role: Role::Administrator,
                actor: "Admin User".into(),
                title: "Mine".into(),
            }
        );
        // No structural effect on the post itself
        assert_eq!(post.title(), "Mine");
    }

    #[test]
    fn test_edit_and_delete_always_succeed() {
        let mut admin = admin();
        let authors = ["Jane", "Bob", "", "Admin User"];
        for name in authors {
            let post = PostHandle::new(Post::new("Title", "one two", name));
            admin.edit_post(&post, "New", "three").unwrap();
            assert_eq!(post.title(), "New");
            assert_eq!(post.word_count(), 1);
            assert!(admin.delete_post(&post).unwrap().is_success());
        }
    }
}
