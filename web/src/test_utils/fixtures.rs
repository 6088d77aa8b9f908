//! Test fixtures
//!
//! Factory functions for creating feed items with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::app::FeedContext;
use crate::domain::entities::{EventType, FeedEvent, FeedRecipe, User};

/// Fixed context used by pager tests
pub fn test_context() -> FeedContext {
    FeedContext {
        feed_type: "home".to_string(),
        user_id: 7,
        page_size: 10,
    }
}

/// Create an event with every field populated, created at `millis`
pub fn test_event(event_type: EventType, millis: i64) -> FeedEvent {
    FeedEvent {
        event_type,
        subject_slug: Some("alice".to_string()),
        subject_fullname: Some("Alice Waters".to_string()),
        author_slug: Some("bob".to_string()),
        recipe_slug: Some("plum-cake".to_string()),
        recipe_title: Some("Plum Cake".to_string()),
        obj_slug: Some("carol".to_string()),
        obj_fullname: Some("Carol King".to_string()),
        list_slug: Some("sunday-bakes".to_string()),
        list_title: Some("Sunday Bakes".to_string()),
        thumbnail_url: None,
        created_at: Utc.timestamp_millis_opt(millis).unwrap(),
    }
}

/// Create a recipe card, optionally with image fields
pub fn test_recipe(recipe_slug: &str, millis: i64, with_image: bool) -> FeedRecipe {
    FeedRecipe {
        author_slug: "bob".to_string(),
        author_fullname: "Bob Smith".to_string(),
        recipe_slug: recipe_slug.to_string(),
        recipe_title: "Plum Cake".to_string(),
        recipe_img_base_url: with_image.then(|| "https://img.gingrsnap.com/r/12".to_string()),
        recipe_img_extension: with_image.then(|| "jpg".to_string()),
        modified_at: Utc.timestamp_millis_opt(millis).unwrap(),
    }
}

/// Create a user with an email address
pub fn test_user() -> User {
    User {
        id: 1,
        slug: "alice".to_string(),
        fullname: "Alice Waters".to_string(),
        email_addr: Some("alice@example.com".to_string()),
    }
}
