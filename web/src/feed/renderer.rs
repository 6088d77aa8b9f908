//! Feed renderer
//!
//! Renders feed items and the "load more" control to HTML fragments.
//! Each event type has its own template; recipe cards pick a template by
//! whether the recipe has an image.

use askama::Template;
use chrono::{DateTime, SecondsFormat, Utc};
use urlencoding::encode;

use crate::app::{FeedEntry, FeedList, LoadMoreState};
use crate::domain::entities::{EventType, FeedEvent, FeedRecipe};

/// Link targets and labels interpolated into event templates
struct EventLinks<'a> {
    subject_url: String,
    subject_name: &'a str,
    recipe_url: String,
    recipe_title: &'a str,
    object_url: String,
    object_name: &'a str,
}

impl<'a> EventLinks<'a> {
    fn from_event(event: &'a FeedEvent) -> Self {
        Self {
            subject_url: profile_url(event.subject_slug.as_deref()),
            subject_name: event.subject_fullname.as_deref().unwrap_or_default(),
            recipe_url: recipe_url(event.author_slug.as_deref(), event.recipe_slug.as_deref()),
            recipe_title: event.recipe_title.as_deref().unwrap_or_default(),
            object_url: profile_url(event.obj_slug.as_deref()),
            object_name: event.obj_fullname.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "events/published.html")]
struct PublishedTemplate<'a> {
    links: EventLinks<'a>,
}

#[derive(Template)]
#[template(path = "events/forked.html")]
struct ForkedTemplate<'a> {
    links: EventLinks<'a>,
}

#[derive(Template)]
#[template(path = "events/updated.html")]
struct UpdatedTemplate<'a> {
    links: EventLinks<'a>,
}

#[derive(Template)]
#[template(path = "events/made.html")]
struct MadeTemplate<'a> {
    links: EventLinks<'a>,
}

#[derive(Template)]
#[template(path = "events/tipped.html")]
struct TippedTemplate<'a> {
    links: EventLinks<'a>,
}

#[derive(Template)]
#[template(path = "events/followed.html")]
struct FollowedTemplate<'a> {
    links: EventLinks<'a>,
}

struct RecipeLinks<'a> {
    recipe_url: String,
    title: &'a str,
    author_url: String,
    author_name: &'a str,
}

#[derive(Template)]
#[template(path = "recipes/image_card.html")]
struct ImageCardTemplate<'a> {
    links: RecipeLinks<'a>,
    image_url: String,
}

#[derive(Template)]
#[template(path = "recipes/text_card.html")]
struct TextCardTemplate<'a> {
    links: RecipeLinks<'a>,
}

#[derive(Template)]
#[template(path = "item.html")]
struct ItemTemplate<'a> {
    body: &'a str,
    thumbnail_url: Option<String>,
    iso: String,
    label: String,
    millis: i64,
}

#[derive(Template)]
#[template(path = "load_more.html")]
struct LoadMoreTemplate<'a> {
    css_class: &'a str,
    label: &'a str,
    reason: Option<&'a str>,
}

/// Render the body of an activity event
///
/// Event types without a template render an empty body.
pub fn render_event_body(event: &FeedEvent) -> askama::Result<String> {
    let links = EventLinks::from_event(event);

    match event.event_type {
        EventType::Published => PublishedTemplate { links }.render(),
        EventType::Forked => ForkedTemplate { links }.render(),
        EventType::Updated => UpdatedTemplate { links }.render(),
        EventType::Made => MadeTemplate { links }.render(),
        EventType::Tipped => TippedTemplate { links }.render(),
        EventType::Followed => FollowedTemplate { links }.render(),
        EventType::ListCreated | EventType::Unknown(_) => {
            tracing::debug!(event_type = %event.event_type, "No template for event type");
            Ok(String::new())
        }
    }
}

/// Render a recipe card, with an image only when the recipe has one
pub fn render_recipe_body(recipe: &FeedRecipe) -> askama::Result<String> {
    let links = RecipeLinks {
        recipe_url: recipe_url(Some(&recipe.author_slug), Some(&recipe.recipe_slug)),
        title: &recipe.recipe_title,
        author_url: profile_url(Some(&recipe.author_slug)),
        author_name: &recipe.author_fullname,
    };

    match recipe.thumbnail_url() {
        Some(image_url) => ImageCardTemplate {
            links,
            image_url: escape_html(&image_url),
        }
        .render(),
        None => TextCardTemplate { links }.render(),
    }
}

/// Wrap a rendered body in a list item carrying its time label and hidden cursor timestamp
pub fn render_item(
    body: &str,
    thumbnail_url: Option<&str>,
    at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> askama::Result<String> {
    ItemTemplate {
        body,
        thumbnail_url: thumbnail_url.map(escape_html),
        iso: at.to_rfc3339_opts(SecondsFormat::Secs, true),
        label: super::time_ago(at, now),
        millis: at.timestamp_millis(),
    }
    .render()
}

/// Render the "load more" control; a removed control renders nothing
pub fn render_load_more(state: &LoadMoreState) -> askama::Result<String> {
    let template = match state {
        LoadMoreState::Ready => LoadMoreTemplate {
            css_class: "load-more",
            label: "Load more",
            reason: None,
        },
        LoadMoreState::Loading => LoadMoreTemplate {
            css_class: "load-more loading",
            label: "Loading...",
            reason: None,
        },
        LoadMoreState::Failed { reason } => LoadMoreTemplate {
            css_class: "load-more error",
            label: "Try again",
            reason: Some(reason.as_str()),
        },
        LoadMoreState::Removed => return Ok(String::new()),
    };

    template.render()
}

/// Render a whole feed list: every item in order, then the control
pub fn render_list<I: FeedEntry>(list: &FeedList<I>, now: DateTime<Utc>) -> askama::Result<String> {
    let mut buf = String::new();

    buf.push_str("<ul class=\"feed\">");
    for item in list.items() {
        buf.push_str(&item.render(now)?);
    }
    buf.push_str(&render_load_more(list.control())?);
    buf.push_str("</ul>");

    Ok(buf)
}

/// Escape text for HTML content and quoted attributes
///
/// Only the five markup-significant characters are replaced, so URLs keep their slashes.
pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn profile_url(slug: Option<&str>) -> String {
    match slug {
        Some(slug) if !slug.is_empty() => format!("/{}", encode(slug)),
        _ => "#".to_string(),
    }
}

fn recipe_url(author_slug: Option<&str>, recipe_slug: Option<&str>) -> String {
    match (author_slug, recipe_slug) {
        (Some(author), Some(recipe)) if !author.is_empty() && !recipe.is_empty() => {
            format!("/{}/{}", encode(author), encode(recipe))
        }
        _ => "#".to_string(),
    }
}
