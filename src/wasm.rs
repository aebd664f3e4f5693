use wasm_bindgen::prelude::*;

use crate::classify::{ThrownError, classify};
use crate::password::join_password_messages;
use crate::routing::normalize;
use crate::routing::plan::RoutingPlan;
use crate::types::LocalizationConfig;

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn parse_thrown(json: &str) -> Result<ThrownError, JsValue> {
    serde_json::from_str::<serde_json::Value>(json)
        .map(ThrownError::from_json)
        .map_err(|_| error_result("Invalid JSON"))
}

/// Classify a thrown error payload: `{"kind": "unknown" | "wallet" | "api_response"}`.
#[wasm_bindgen]
pub fn classify_error_json(json: &str) -> JsValue {
    let thrown = match parse_thrown(json) {
        Ok(t) => t,
        Err(e) => return e,
    };
    let kind = classify(&thrown).class();
    to_js(&serde_json::json!({ "kind": kind.as_ref() }))
}

/// Route a thrown error payload into the given field ids.
///
/// `field_ids_json` is a JSON array of strings; `localization_json` an optional
/// localization config. Password errors are merged with the default joiner.
#[wasm_bindgen]
pub fn route_error_json(
    json: &str,
    field_ids_json: &str,
    localization_json: Option<String>,
) -> JsValue {
    let thrown = match parse_thrown(json) {
        Ok(t) => t,
        Err(e) => return e,
    };
    let Ok(field_ids) = serde_json::from_str::<Vec<String>>(field_ids_json) else {
        return error_result("Expected a JSON array of field ids");
    };
    let localization = match localization_json
        .as_deref()
        .map(serde_json::from_str::<LocalizationConfig>)
    {
        None => None,
        Some(Ok(config)) => Some(config),
        Some(Err(_)) => return error_result("Invalid localization config"),
    };

    let mut plan = RoutingPlan::new(field_ids);
    match plan.apply(thrown, &join_password_messages, localization.as_ref()) {
        Ok(()) => to_js(&plan),
        Err(_) => error_result("unhandled"),
    }
}

/// Convert an API parameter name to the field id convention.
#[wasm_bindgen]
pub fn normalize_param_name(name: &str) -> String {
    normalize(name)
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({ "error": msg }))
}
