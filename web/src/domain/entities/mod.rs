//! Domain entities
//!
//! Feed items as the endpoints deliver them, paging primitives, and the
//! user/email models used by mail composition.

pub mod email;
pub mod event;
pub mod page;
pub mod recipe;
pub mod user;

pub use email::{Email, MailTemplate};
pub use event::{EventType, FeedEvent};
pub use page::{Page, PageCursor, PageRequest};
pub use recipe::{FeedRecipe, THUMBNAIL_SUFFIX};
pub use user::User;
