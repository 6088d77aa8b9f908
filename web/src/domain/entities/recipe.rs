//! Recipe feed entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Suffix appended to an image base URL to address its thumbnail rendition
pub const THUMBNAIL_SUFFIX: &str = "_thumbnail";

/// A recipe card in the recipe feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecipe {
    pub author_slug: String,
    pub author_fullname: String,
    pub recipe_slug: String,
    pub recipe_title: String,
    #[serde(default)]
    pub recipe_img_base_url: Option<String>,
    #[serde(default)]
    pub recipe_img_extension: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub modified_at: DateTime<Utc>,
}

impl FeedRecipe {
    /// Thumbnail URL, only when both the base URL and the extension are present
    pub fn thumbnail_url(&self) -> Option<String> {
        match (&self.recipe_img_base_url, &self.recipe_img_extension) {
            (Some(base), Some(ext)) if !base.is_empty() && !ext.is_empty() => {
                Some(format!("{}{}.{}", base, THUMBNAIL_SUFFIX, ext))
            }
            _ => None,
        }
    }
}
