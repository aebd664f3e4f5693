use crate::classify::{AuthFailure, ErrorKind, classify};
use crate::password::PasswordFormatter;
use crate::routing::fields::route_fields;
use crate::routing::global::route_global;
use crate::routing::{FormField, GlobalErrorSink, RoutedError, partition};
use crate::types::{ApiErrorItem, LocalizationConfig};

/// An error the router does not recognize, handed back untouched.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unhandled error: {0:?}")]
pub struct Unhandled<E>(pub E);

impl<E> Unhandled<E> {
    pub fn into_inner(self) -> E {
        self.0
    }
}

/// Route a failed authentication call into form fields and the global slot.
///
/// Unrecognized errors come back as [`Unhandled`] carrying the original value;
/// callers are expected to propagate them. Wallet errors only touch the global
/// slot. API responses are partitioned, every field is rewritten (set or
/// cleared), then the global slot is cleared and refilled.
pub fn handle<E: AuthFailure, F: FormField>(
    err: E,
    fields: &mut [F],
    global: Option<&mut dyn GlobalErrorSink>,
    formatter: &PasswordFormatter<'_>,
    localization: Option<&LocalizationConfig>,
) -> Result<(), Unhandled<E>> {
    match classify(&err) {
        ErrorKind::Unknown => {
            tracing::debug!("error not recognized, handing back to caller");
            return Err(Unhandled(err));
        }
        ErrorKind::Wallet(wallet) => {
            tracing::debug!(code = wallet.code, "routing wallet error to global slot");
            if let Some(sink) = global {
                sink.set_global_error(Some(RoutedError::Message(wallet.message.clone())));
            }
        }
        ErrorKind::ApiResponse(response) => {
            let parts = partition(&response.items);
            tracing::debug!(
                field_errors = parts.field_errors.len(),
                global_errors = parts.global_errors.len(),
                "routing api error response"
            );
            route_fields(fields, &parts.field_errors, formatter, localization);
            route_global(&parts.global_errors, global);
        }
    }
    Ok(())
}

/// First error without a parameter name, if `err` is an API response.
pub fn first_global_error<E: AuthFailure + ?Sized>(err: &E) -> Option<&ApiErrorItem> {
    match classify(err) {
        ErrorKind::ApiResponse(response) => {
            partition(&response.items).global_errors.first().copied()
        }
        ErrorKind::Unknown | ErrorKind::Wallet(_) => None,
    }
}

/// First error carrying a parameter name, if `err` is an API response.
pub fn first_field_error<E: AuthFailure + ?Sized>(err: &E) -> Option<&ApiErrorItem> {
    match classify(err) {
        ErrorKind::ApiResponse(response) => {
            partition(&response.items).field_errors.first().copied()
        }
        ErrorKind::Unknown | ErrorKind::Wallet(_) => None,
    }
}
