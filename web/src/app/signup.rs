//! Signup form validation
//!
//! Field rules and messages for the signup page, plus the per-field
//! feedback the page shows: a `success`/`error` class on the control group
//! and one inline help message for the first rule a field breaks.

use std::sync::OnceLock;

use askama::Template;
use regex::Regex;
use serde::Deserialize;

use crate::feed::renderer::escape_html;

pub const PASSWORD_MIN_LENGTH: usize = 4;

const REQUIRED_MESSAGE: &str = "This field is required.";
const EMAIL_MESSAGE: &str = "Please provide a valid email address.";
const EQUAL_TO_MESSAGE: &str = "Please enter the same value again.";

static SUCCESS: FieldFeedback = FieldFeedback::Success;

/// Submitted signup fields, named as in the form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub fullname: String,
    #[serde(default, rename = "emailAddr")]
    pub email_addr: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "confirmpassword")]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    Fullname,
    EmailAddr,
    Password,
    ConfirmPassword,
}

impl SignupField {
    pub const ALL: [SignupField; 4] = [
        SignupField::Fullname,
        SignupField::EmailAddr,
        SignupField::Password,
        SignupField::ConfirmPassword,
    ];

    /// Input name in the form
    pub fn name(&self) -> &'static str {
        match self {
            SignupField::Fullname => "fullname",
            SignupField::EmailAddr => "emailAddr",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmpassword",
        }
    }
}

impl std::fmt::Display for SignupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFeedback {
    Success,
    Error(String),
}

#[derive(Template)]
#[template(path = "help_inline.html")]
struct HelpInlineTemplate {
    message: String,
}

impl FieldFeedback {
    /// Class toggled on the field's control group
    pub fn css_class(&self) -> &'static str {
        match self {
            FieldFeedback::Success => "success",
            FieldFeedback::Error(_) => "error",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldFeedback::Success => None,
            FieldFeedback::Error(message) => Some(message.as_str()),
        }
    }

    /// Inline help markup placed after the input; nothing for a valid field
    pub fn help_inline(&self) -> askama::Result<Option<String>> {
        self.message()
            .map(|message| {
                HelpInlineTemplate {
                    message: escape_html(message),
                }
                .render()
            })
            .transpose()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupValidation {
    fields: Vec<(SignupField, FieldFeedback)>,
}

impl SignupValidation {
    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|(_, feedback)| *feedback == FieldFeedback::Success)
    }

    pub fn feedback(&self, field: SignupField) -> &FieldFeedback {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, feedback)| feedback)
            .unwrap_or(&SUCCESS)
    }

    /// Failing fields with their messages, in form order
    pub fn errors(&self) -> Vec<(SignupField, &str)> {
        self.fields
            .iter()
            .filter_map(|(field, feedback)| feedback.message().map(|m| (*field, m)))
            .collect()
    }
}

/// Validate every signup field
pub fn validate_signup(form: &SignupForm) -> SignupValidation {
    let fields = SignupField::ALL
        .iter()
        .map(|field| (*field, validate_field(*field, form)))
        .collect();

    SignupValidation { fields }
}

fn validate_field(field: SignupField, form: &SignupForm) -> FieldFeedback {
    let result = match field {
        SignupField::Fullname => required(&form.fullname),
        SignupField::EmailAddr => required(&form.email_addr).and_then(|_| email(&form.email_addr)),
        SignupField::Password => required(&form.password).and_then(|_| min_length(&form.password)),
        SignupField::ConfirmPassword => required(&form.confirm_password)
            .and_then(|_| equal_to(&form.confirm_password, &form.password)),
    };

    match result {
        Ok(()) => FieldFeedback::Success,
        Err(message) => FieldFeedback::Error(message),
    }
}

fn required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(REQUIRED_MESSAGE.to_string())
    } else {
        Ok(())
    }
}

fn email(value: &str) -> Result<(), String> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();

    let valid = EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .map(|re| re.is_match(value.trim()))
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(EMAIL_MESSAGE.to_string())
    }
}

fn min_length(value: &str) -> Result<(), String> {
    if value.trim().chars().count() >= PASSWORD_MIN_LENGTH {
        Ok(())
    } else {
        Err(format!(
            "Password must be At least {} characters long.",
            PASSWORD_MIN_LENGTH
        ))
    }
}

fn equal_to(value: &str, other: &str) -> Result<(), String> {
    if value == other {
        Ok(())
    } else {
        Err(EQUAL_TO_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            fullname: "Alice Waters".to_string(),
            email_addr: "alice@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        let result = validate_signup(&valid_form());

        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(result.feedback(SignupField::EmailAddr).css_class(), "success");
    }

    #[test]
    fn empty_form_requires_everything() {
        let result = validate_signup(&SignupForm::default());

        assert!(!result.is_valid());
        let errors = result.errors();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|(_, m)| *m == REQUIRED_MESSAGE));
    }

    #[test]
    fn invalid_email() {
        let mut form = valid_form();
        form.email_addr = "alice-at-example".to_string();

        let result = validate_signup(&form);

        assert_eq!(
            result.feedback(SignupField::EmailAddr),
            &FieldFeedback::Error("Please provide a valid email address.".to_string())
        );
        assert_eq!(result.feedback(SignupField::EmailAddr).css_class(), "error");
    }

    #[test]
    fn short_password() {
        let mut form = valid_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();

        let result = validate_signup(&form);

        assert_eq!(
            result.feedback(SignupField::Password).message(),
            Some("Password must be At least 4 characters long.")
        );
        assert_eq!(result.feedback(SignupField::ConfirmPassword), &FieldFeedback::Success);
    }

    #[test]
    fn padded_short_password_is_too_short() {
        let mut form = valid_form();
        form.password = "  ab  ".to_string();
        form.confirm_password = "  ab  ".to_string();

        let result = validate_signup(&form);

        assert_eq!(
            result.feedback(SignupField::Password).message(),
            Some("Password must be At least 4 characters long.")
        );
    }

    #[test]
    fn mismatched_confirmation() {
        let mut form = valid_form();
        form.confirm_password = "secreT".to_string();

        let result = validate_signup(&form);

        assert_eq!(
            result.errors(),
            vec![(SignupField::ConfirmPassword, "Please enter the same value again.")]
        );
    }

    #[test]
    fn help_inline_only_for_errors() {
        let error = FieldFeedback::Error("<b>bad</b>".to_string());

        assert_eq!(FieldFeedback::Success.help_inline().unwrap(), None);
        let html = error.help_inline().unwrap().unwrap();
        assert!(html.starts_with("<span class=\"help-inline\">"));
        assert_eq!(html, "<span class=\"help-inline\">&lt;b&gt;bad&lt;/b&gt;</span>");
    }

    #[test]
    fn form_field_names() {
        let form: SignupForm = serde_json::from_str(
            r#"{"fullname":"A","emailAddr":"a@b.co","password":"pass","confirmpassword":"pass"}"#,
        )
        .unwrap();

        assert!(validate_signup(&form).is_valid());
        assert_eq!(SignupField::ConfirmPassword.to_string(), "confirmpassword");
    }
}
