//! Blog post management by role.
//!
//! # Overview
//!
//! - **PostManager**: the create/edit/delete contract every role implements.
//! - **Administrator**: edits and deletes any post; tracks none.
//! - **Author**: edits and deletes only posts carrying its own name, and keeps
//!   the posts it created in order.
//! - **Actor**: either role, chosen at runtime.
//!
//! Every outcome is logged through `tracing` and returned to the caller as a
//! [`Notice`](content::Notice) or an [`Error`].
//!
//! # Example
//!
//! ```
//! use blog::{Administrator, Author, PostManager};
//! use content::User;
//!
//! let mut admin = Administrator::new(User::new("Admin User", "admin@blog.com", "pw"));
//! let mut jane = Author::new(User::new("Jane", "jane@blog.com", "pw"));
//!
//! let hello = admin.create_post("Hello", "a b c");
//! assert!(jane.edit_post(&hello, "Mine now", "").is_err());
//! assert_eq!(hello.title(), "Hello");
//!
//! let notice = admin.edit_post(&hello, "Hi", "a b")?;
//! assert_eq!(notice.to_string(), "Post 'Hi' edited by Admin");
//! # Ok::<(), blog::Error>(())
//! ```

mod actor;
mod admin;
mod author;
mod error;
mod manager;

pub use actor::Actor;
pub use admin::Administrator;
pub use author::Author;
pub use error::{Error, Result};
pub use manager::PostManager;
