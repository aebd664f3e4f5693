use crate::routing::normalize;
use crate::types::{ApiErrorItem, LocalizationConfig};

pub const PASSWORD: &str = "password";
pub const NEW_PASSWORD: &str = "newPassword";

/// Turns every password-related error of a pass into one display message.
/// Returning `None` (or an empty string) clears the password field instead.
pub type PasswordFormatter<'a> =
    dyn Fn(&[&ApiErrorItem], Option<&LocalizationConfig>) -> Option<String> + 'a;

pub fn is_password_field(id: &str) -> bool {
    id == PASSWORD || id == NEW_PASSWORD
}

/// True when the raw or normalized parameter name is one of the password aliases.
pub fn is_password_param(name: &str) -> bool {
    is_password_field(name) || is_password_field(&normalize(name))
}

/// Formatter for callers without a localization layer: the distinct display
/// messages in order, space separated.
pub fn join_password_messages(
    errors: &[&ApiErrorItem],
    _config: Option<&LocalizationConfig>,
) -> Option<String> {
    let mut messages: Vec<&str> = Vec::with_capacity(errors.len());
    for error in errors {
        let message = error.display_message();
        if !message.is_empty() && !messages.contains(&message) {
            messages.push(message);
        }
    }
    if messages.is_empty() {
        None
    } else {
        Some(messages.join(" "))
    }
}
