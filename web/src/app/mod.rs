//! Application layer
//!
//! The feed list model and its pager, signup validation and mail composition.

pub mod feed_list;
pub mod mail_service;
pub mod pager;
pub mod signup;

pub use feed_list::{FeedEntry, FeedList, LoadMoreState};
pub use mail_service::MailService;
pub use pager::{EventPager, FeedContext, FeedPager, LoadOutcome, RecipePager};
pub use signup::{
    validate_signup, FieldFeedback, SignupField, SignupForm, SignupValidation,
    PASSWORD_MIN_LENGTH,
};
