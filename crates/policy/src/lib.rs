//! Role-based post permissions.
//!
//! Core principle: **an actor mutates a post only if its role allows it.**
//! Administrators act on any post; authors act only on posts whose author
//! name equals their own.

mod capability;
mod policy;

pub use capability::{Action, PermissionRequest};
pub use policy::{Decision, Policy};
