use crate::types::{ApiErrorResponse, WalletError};

/// Wallet provider error codes: user rejected request, invalid params, internal error.
pub const WALLET_ERROR_CODES: &[i64] = &[4001, 32602, 32603];

/// Classification predicates for a thrown error value.
///
/// Implemented by whatever type the transport layer surfaces on failure.
/// `is_known` gates everything else: an error it rejects is never routed.
pub trait AuthFailure {
    fn is_known(&self) -> bool;

    fn wallet_error(&self) -> Option<&WalletError>;

    fn api_response(&self) -> Option<&ApiErrorResponse>;
}

impl<T: AuthFailure + ?Sized> AuthFailure for &T {
    fn is_known(&self) -> bool {
        (**self).is_known()
    }

    fn wallet_error(&self) -> Option<&WalletError> {
        (**self).wallet_error()
    }

    fn api_response(&self) -> Option<&ApiErrorResponse> {
        (**self).api_response()
    }
}

/// Result of classifying a thrown error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind<'a> {
    Unknown,
    Wallet(&'a WalletError),
    ApiResponse(&'a ApiErrorResponse),
}

impl ErrorKind<'_> {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Unknown => ErrorClass::Unknown,
            Self::Wallet(_) => ErrorClass::Wallet,
            Self::ApiResponse(_) => ErrorClass::ApiResponse,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorClass {
    Unknown,
    Wallet,
    ApiResponse,
}

/// Wallet is checked before the API shape since it is the more specific signal.
pub fn classify<E: AuthFailure + ?Sized>(err: &E) -> ErrorKind<'_> {
    if !err.is_known() {
        return ErrorKind::Unknown;
    }
    if let Some(wallet) = err.wallet_error() {
        return ErrorKind::Wallet(wallet);
    }
    if let Some(response) = err.api_response() {
        return ErrorKind::ApiResponse(response);
    }
    ErrorKind::Unknown
}

/// A thrown error decoded from a JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ThrownError {
    ApiResponse(ApiErrorResponse),
    Wallet(WalletError),
    Unrecognized(serde_json::Value),
}

impl ThrownError {
    pub fn from_json(value: serde_json::Value) -> Self {
        if let Some(wallet) = parse_wallet_error(&value) {
            return Self::Wallet(wallet);
        }
        if value.get("errors").is_some_and(serde_json::Value::is_array)
            && let Ok(response) = ApiErrorResponse::from_json(&value)
        {
            return Self::ApiResponse(response);
        }
        Self::Unrecognized(value)
    }
}

fn parse_wallet_error(value: &serde_json::Value) -> Option<WalletError> {
    let code = value.get("code")?.as_i64()?;
    if !WALLET_ERROR_CODES.contains(&code) {
        return None;
    }
    let message = value.get("message")?.as_str()?;
    Some(WalletError {
        code,
        message: message.to_string(),
    })
}

impl AuthFailure for ThrownError {
    fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    fn wallet_error(&self) -> Option<&WalletError> {
        match self {
            Self::Wallet(wallet) => Some(wallet),
            _ => None,
        }
    }

    fn api_response(&self) -> Option<&ApiErrorResponse> {
        match self {
            Self::ApiResponse(response) => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
#[expect(clippy::panic, reason = "test assertions")]
mod tests {
    use super::*;

    struct Both {
        wallet: WalletError,
        response: ApiErrorResponse,
        known: bool,
    }

    impl AuthFailure for Both {
        fn is_known(&self) -> bool {
            self.known
        }

        fn wallet_error(&self) -> Option<&WalletError> {
            Some(&self.wallet)
        }

        fn api_response(&self) -> Option<&ApiErrorResponse> {
            Some(&self.response)
        }
    }

    fn both(known: bool) -> Both {
        Both {
            wallet: WalletError {
                code: 4001,
                message: "User rejected the request.".to_string(),
            },
            response: ApiErrorResponse::default(),
            known,
        }
    }

    #[test]
    fn wallet_wins_when_both_shapes_match() {
        let err = both(true);
        assert_eq!(classify(&err), ErrorKind::Wallet(&err.wallet));
    }

    #[test]
    fn unknown_gate_overrides_shape() {
        assert_eq!(classify(&both(false)), ErrorKind::Unknown);
    }

    #[test]
    fn wallet_payload_requires_provider_code_and_message() {
        let wallet = ThrownError::from_json(serde_json::json!({
            "code": 4001,
            "message": "User rejected the request."
        }));
        assert_eq!(
            wallet,
            ThrownError::Wallet(WalletError {
                code: 4001,
                message: "User rejected the request.".to_string()
            })
        );

        let other_code = serde_json::json!({"code": 500, "message": "boom"});
        assert_eq!(
            ThrownError::from_json(other_code.clone()),
            ThrownError::Unrecognized(other_code)
        );

        let no_message = serde_json::json!({"code": 32603});
        assert_eq!(
            ThrownError::from_json(no_message.clone()),
            ThrownError::Unrecognized(no_message)
        );
    }

    #[test]
    fn api_payload_classifies_as_response() {
        let err = ThrownError::from_json(serde_json::json!({
            "errors": [{ "code": "form_param_nil", "message": "Enter a password",
                         "meta": { "param_name": "password" } }]
        }));
        let ErrorKind::ApiResponse(response) = classify(&err) else {
            panic!("expected api response, got {err:?}");
        };
        assert_eq!(response.items.len(), 1);
        assert_eq!(classify(&err).class(), ErrorClass::ApiResponse);
    }

    #[test]
    fn malformed_api_payload_is_unrecognized() {
        let raw = serde_json::json!({"errors": [{"message": 3}]});
        let err = ThrownError::from_json(raw.clone());
        assert_eq!(err, ThrownError::Unrecognized(raw));
        assert_eq!(classify(&err), ErrorKind::Unknown);
    }

    #[test]
    fn error_class_string_forms() {
        assert_eq!(ErrorClass::ApiResponse.to_string(), "api_response");
        assert_eq!("wallet".parse::<ErrorClass>().ok(), Some(ErrorClass::Wallet));
        assert_eq!("metamask".parse::<ErrorClass>().ok(), None);
    }
}
