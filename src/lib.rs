#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classify;
pub mod dispatch;
pub mod error;
pub mod password;
pub mod routing;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classify::{AuthFailure, ErrorClass, ErrorKind, ThrownError, WALLET_ERROR_CODES, classify};
pub use dispatch::{Unhandled, first_field_error, first_global_error, handle};
pub use error::Error;
pub use password::{
    NEW_PASSWORD, PASSWORD, PasswordFormatter, is_password_field, is_password_param,
    join_password_messages,
};
pub use routing::fields::route_fields;
pub use routing::global::route_global;
pub use routing::plan::{PlannedField, RoutingPlan};
pub use routing::{FormField, GlobalErrorSink, Partition, RoutedError, normalize, partition};
pub use types::{
    ApiErrorItem, ApiErrorJson, ApiErrorMetaJson, ApiErrorResponse, LocalizationConfig,
    PasswordSettings, WalletError,
};
