use crate::error::Error;

/// One atomic error reported by the authentication API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ApiErrorItem {
    /// Request parameter the error refers to (snake_case, e.g. `"email_address"`).
    /// `None` or empty marks a form-wide error.
    pub parameter_name: Option<String>,
    /// Short, user-facing message.
    pub short_message: String,
    /// Longer explanation, if the API supplied one.
    pub long_message: Option<String>,
    /// Machine-readable error code (e.g. `"form_password_pwned"`).
    pub code: String,
}

impl ApiErrorItem {
    /// The message to show for this error: the long message when present, the short one otherwise.
    pub fn display_message(&self) -> &str {
        match self.long_message.as_deref() {
            Some(long) if !long.is_empty() => long,
            _ => &self.short_message,
        }
    }

    /// Parameter name, treating an empty string as absent.
    pub fn param(&self) -> Option<&str> {
        self.parameter_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// A structured multi-error response from the authentication API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiErrorResponse {
    pub items: Vec<ApiErrorItem>,
}

impl ApiErrorResponse {
    /// Decode the API's `{"errors": [...]}` body.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, Error> {
        let errors = value.get("errors").ok_or_else(|| Error::Parse {
            reason: "response missing errors array".into(),
        })?;
        let items: Vec<ApiErrorJson> = serde_json::from_value(errors.clone())?;
        Ok(Self {
            items: items.into_iter().map(ApiErrorItem::from).collect(),
        })
    }
}

/// Wire shape of a single API error.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiErrorJson {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub long_message: Option<String>,
    #[serde(default)]
    pub meta: Option<ApiErrorMetaJson>,
}

/// `meta` block of a wire error. Only `param_name` drives routing.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ApiErrorMetaJson {
    #[serde(default)]
    pub param_name: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub email_addresses: Option<Vec<String>>,
    #[serde(default)]
    pub identifiers: Option<Vec<String>>,
    #[serde(default)]
    pub zxcvbn: Option<serde_json::Value>,
}

impl From<ApiErrorJson> for ApiErrorItem {
    fn from(json: ApiErrorJson) -> Self {
        Self {
            parameter_name: json.meta.and_then(|meta| meta.param_name),
            short_message: json.message,
            long_message: json.long_message,
            code: json.code,
        }
    }
}

/// An error surfaced by a browser-extension wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct WalletError {
    pub code: i64,
    pub message: String,
}

/// Password policy as published by the authentication backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct PasswordSettings {
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub require_special_char: bool,
    pub require_numbers: bool,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub show_zxcvbn: bool,
    pub min_zxcvbn_strength: Option<u8>,
    pub allowed_special_characters: Option<String>,
}

/// Settings handed through, untouched, to the password formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    pub locale: String,
    pub password_settings: PasswordSettings,
}
