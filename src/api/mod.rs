//! Twist REST API client
//!
//! `client` owns the transport; every other module adds the operations for
//! one resource family to `TwistClient`.

mod attachments;
mod channels;
pub mod client;
mod conversations;
pub mod error;
mod groups;
mod reactions;
mod search;
mod threads;
mod users;
mod workspaces;

#[cfg(test)]
pub(crate) mod mock;

pub use attachments::AttachmentTarget;
pub use client::TwistClient;
pub use error::ApiError;
pub use reactions::ReactionTarget;
