//! Domain records for the blog: users, posts and the notices that post
//! operations produce.
//!
//! # Core Concepts
//!
//! ## User
//!
//! A [`User`] is a named account. Its password is encapsulated: readable and
//! writable only through accessors, never serialized, never printed.
//!
//! ## Post
//!
//! A [`Post`] holds a title, content and the author's name. The author name is
//! the ownership key used for permission checks; it is a copied string, not a
//! link to the `User`.
//!
//! ## PostHandle
//!
//! A [`PostHandle`] shares one post between several holders, e.g. an author's
//! collection and an administrator who was handed the post.
//!
//! ## Notice
//!
//! A [`Notice`] reports the outcome of an operation, tagged with a
//! [`NoticeKind`] naming the actor [`Role`] and the post title.
//!
//! # Example
//!
//! ```
//! use content::{Post, PostHandle, User};
//!
//! let jane = User::new("Jane", "jane@blog.com", "secret");
//! assert_eq!(jane.to_string(), "User: Jane, Email: jane@blog.com");
//!
//! let post = PostHandle::new(Post::new("Mine", "x y", &jane.name));
//! assert_eq!(post.word_count(), 2);
//! assert_eq!(post.author(), "Jane");
//! ```

mod notice;
mod post;
mod user;

pub use notice::{Notice, NoticeKind, Role};
pub use post::{Post, PostHandle};
pub use user::User;
