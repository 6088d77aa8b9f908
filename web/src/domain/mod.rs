//! Domain layer
//!
//! - `entities`: Feed items, paging primitives, users and emails
//! - `ports`: Trait definitions for the feed endpoints and mail delivery

pub mod entities;
pub mod ports;
