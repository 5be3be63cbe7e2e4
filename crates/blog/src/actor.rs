//! Actors whose role is decided at runtime.

use crate::manager::PostManager;
use crate::{Administrator, Author, Result};
use content::{Notice, PostHandle, Role, User};

/// An administrator or an author.
#[derive(Debug, Clone)]
pub enum Actor {
    Administrator(Administrator),
    Author(Author),
}

impl Actor {
    pub fn new(user: User, role: Role) -> Self {
        match role {
            Role::Administrator => Actor::Administrator(Administrator::new(user)),
            Role::Author => Actor::Author(Author::new(user)),
        }
    }

    pub fn as_author(&self) -> Option<&Author> {
        match self {
            Actor::Author(author) => Some(author),
            Actor::Administrator(_) => None,
        }
    }

    fn manager(&self) -> &dyn PostManager {
        match self {
            Actor::Administrator(admin) => admin,
            Actor::Author(author) => author,
        }
    }

    fn manager_mut(&mut self) -> &mut dyn PostManager {
        match self {
            Actor::Administrator(admin) => admin,
            Actor::Author(author) => author,
        }
    }
}

impl PostManager for Actor {
    fn role(&self) -> Role {
        self.manager().role()
    }

    fn user(&self) -> &User {
        self.manager().user()
    }

    fn create_post(&mut self, title: &str, content: &str) -> PostHandle {
        self.manager_mut().create_post(title, content)
    }

    fn edit_post(
        &mut self,
        post: &PostHandle,
        new_title: &str,
        new_content: &str,
    ) -> Result<Notice> {
        self.manager_mut().edit_post(post, new_title, new_content)
    }

    fn delete_post(&mut self, post: &PostHandle) -> Result<Notice> {
        self.manager_mut().delete_post(post)
    }
}
