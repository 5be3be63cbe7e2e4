//! Posts and shared post handles.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// A content record.
///
/// `author` holds the creating user's name by value. It is the ownership key
/// for permission checks and cannot be changed once the post exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub content: String,
    author: String,
}

impl Post {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Number of whitespace-delimited words in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post Title: {}\nAuthor: {}\nContent: {}",
            self.title, self.author, self.content
        )
    }
}

/// A shared handle to a [`Post`].
///
/// Cloning the handle shares the post; it does not copy it. Two handles refer
/// to the same post iff [`PostHandle::ptr_eq`] holds.
///
/// Changes go through [`PostHandle::overwrite`], which panics if a [`Ref`]
/// from [`PostHandle::borrow`] is still alive. Drop borrows before handing
/// the post to an edit.
#[derive(Debug, Clone)]
pub struct PostHandle(Rc<RefCell<Post>>);

impl PostHandle {
    pub fn new(post: Post) -> Self {
        Self(Rc::new(RefCell::new(post)))
    }

    pub fn borrow(&self) -> Ref<'_, Post> {
        self.0.borrow()
    }

    /// Replace title and content. The author is left untouched.
    pub fn overwrite(&self, title: impl Into<String>, content: impl Into<String>) {
        let mut post = self.0.borrow_mut();
        post.title = title.into();
        post.content = content.into();
    }

    pub fn ptr_eq(&self, other: &PostHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn title(&self) -> String {
        self.borrow().title.clone()
    }

    pub fn author(&self) -> String {
        self.borrow().author.clone()
    }

    pub fn word_count(&self) -> usize {
        self.borrow().word_count()
    }

    /// Owned copy of the post as it is right now.
    pub fn snapshot(&self) -> Post {
        self.borrow().clone()
    }
}

impl From<Post> for PostHandle {
    fn from(post: Post) -> Self {
        Self::new(post)
    }
}

impl fmt::Display for PostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.borrow(), f)
    }
}
