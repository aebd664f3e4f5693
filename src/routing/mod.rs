pub mod fields;
pub mod global;
pub mod plan;

use crate::types::ApiErrorItem;

/// Value pushed into a field or global error slot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum RoutedError {
    Api(ApiErrorItem),
    Message(String),
}

impl RoutedError {
    pub fn display_message(&self) -> &str {
        match self {
            Self::Api(item) => item.display_message(),
            Self::Message(message) => message,
        }
    }
}

/// A live form control that can display one error.
pub trait FormField {
    fn id(&self) -> &str;

    /// `None` clears the slot.
    fn set_error(&mut self, error: Option<RoutedError>);
}

impl<T: FormField + ?Sized> FormField for &mut T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn set_error(&mut self, error: Option<RoutedError>) {
        (**self).set_error(error);
    }
}

/// The form-wide error slot.
pub trait GlobalErrorSink {
    fn set_global_error(&mut self, error: Option<RoutedError>);
}

impl<F: FnMut(Option<RoutedError>)> GlobalErrorSink for F {
    fn set_global_error(&mut self, error: Option<RoutedError>) {
        self(error);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub field_errors: Vec<&'a ApiErrorItem>,
    pub global_errors: Vec<&'a ApiErrorItem>,
}

/// Split errors into field-scoped (non-empty parameter name) and global ones.
/// Relative order is kept inside each bucket.
pub fn partition(items: &[ApiErrorItem]) -> Partition<'_> {
    let (field_errors, global_errors): (Vec<_>, Vec<_>) =
        items.iter().partition(|item| item.param().is_some());
    Partition {
        field_errors,
        global_errors,
    }
}

/// Convert an API parameter name (`new_password`) to the field id convention (`newPassword`).
///
/// Only an underscore followed by a lowercase ASCII letter is folded, so the
/// result never contains a foldable pair and a second pass is a no-op.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_'
            && let Some(next) = chars.peek().copied()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}
