//! Data models for Twist entities
//!
//! Every record mirrors the JSON the API returns. Fields the service omits
//! decode to their zero value, so partial echoes still parse.

mod attachment;
mod channel;
mod conversation;
mod group;
mod reaction;
mod thread;
mod user;
mod workspace;

pub use attachment::*;
pub use channel::*;
pub use conversation::*;
pub use group::*;
pub use reaction::*;
pub use thread::*;
pub use user::*;
pub use workspace::*;
