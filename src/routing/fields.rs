use crate::password::{PasswordFormatter, is_password_field, is_password_param};
use crate::routing::{FormField, RoutedError, normalize};
use crate::types::{ApiErrorItem, LocalizationConfig};

fn param_matches(item: &ApiErrorItem, id: &str) -> bool {
    item.param()
        .is_some_and(|name| name == id || normalize(name) == id)
}

/// Push at most one error into every field, clearing fields that get none.
///
/// Password errors (`password`, `new_password`, `newPassword`) are merged
/// through `formatter` and shown only on a `password`/`newPassword` field;
/// they never reach any other field. Field-scoped errors that no field claims
/// are dropped here and do not fall back to the global slot.
pub fn route_fields<F: FormField>(
    fields: &mut [F],
    field_errors: &[&ApiErrorItem],
    formatter: &PasswordFormatter<'_>,
    localization: Option<&LocalizationConfig>,
) {
    let (password_errors, other_errors): (Vec<&ApiErrorItem>, Vec<&ApiErrorItem>) =
        field_errors
            .iter()
            .copied()
            .partition(|item| item.param().is_some_and(is_password_param));

    for field in fields.iter_mut() {
        let id = field.id().to_string();

        if is_password_field(&id) && !password_errors.is_empty() {
            let message =
                formatter(password_errors.as_slice(), localization).filter(|m| !m.is_empty());
            tracing::trace!(
                field = %id,
                candidates = password_errors.len(),
                has_message = message.is_some(),
                "routing password errors"
            );
            field.set_error(message.map(RoutedError::Message));
            continue;
        }

        let direct = other_errors
            .iter()
            .copied()
            .find(|item| param_matches(item, &id));
        tracing::trace!(
            field = %id,
            code = direct.map(|item| item.code.as_str()),
            "routing field error"
        );
        field.set_error(direct.cloned().map(RoutedError::Api));
    }

    let unclaimed = other_errors
        .iter()
        .filter(|item| !fields.iter().any(|field| param_matches(item, field.id())))
        .count();
    if unclaimed > 0 {
        tracing::debug!(unclaimed, "dropping field errors with no matching field");
    }
}
