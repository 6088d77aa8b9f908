//! Feed module
//!
//! HTML rendering of feed items and relative time labels.

pub mod renderer;
pub mod timeago;

pub use renderer::{
    render_event_body, render_item, render_list, render_load_more, render_recipe_body,
};
pub use timeago::time_ago;
