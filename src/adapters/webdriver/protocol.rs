//! W3C WebDriver wire format
//!
//! Every response wraps its payload in `{"value": ...}`; failures carry
//! `{"value": {"error": ..., "message": ...}}` instead.

use serde_json::{Value, json};

use crate::core::ports::{ElementId, Locator, SessionError};

/// Key under which the protocol returns element references
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52f-4a4b1f29f92d";

/// Extract the payload of a response body, turning error payloads into errors
pub fn unwrap_value(mut body: Value) -> Result<Value, SessionError> {
    let value = body
        .get_mut("value")
        .map(Value::take)
        .ok_or_else(|| SessionError::Transport(format!("response has no value: {body}")))?;
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        let message = value.get("message").and_then(Value::as_str).unwrap_or_default();
        return Err(match error {
            "no such element" => SessionError::NoSuchElement(message.to_string()),
            "timeout" | "script timeout" => SessionError::Timeout {
                what: message.to_string(),
                after: std::time::Duration::ZERO,
            },
            "invalid session id" => SessionError::Closed,
            _ => SessionError::Protocol {
                error: error.to_string(),
                message: message.to_string(),
            },
        });
    }
    Ok(value)
}

/// Body of a find-elements command
#[must_use]
pub fn locator_body(locator: &Locator) -> Value {
    let (using, value) = match locator {
        Locator::Css(selector) => ("css selector", selector),
        Locator::XPath(expression) => ("xpath", expression),
    };
    json!({ "using": using, "value": value })
}

/// Element references in a find-elements payload
pub fn element_ids(value: &Value) -> Result<Vec<ElementId>, SessionError> {
    let items = value
        .as_array()
        .ok_or_else(|| SessionError::Transport(format!("expected element list, got {value}")))?;
    items
        .iter()
        .map(|item| {
            item.get(ELEMENT_KEY)
                .and_then(Value::as_str)
                .map(|id| ElementId(id.to_string()))
                .ok_or_else(|| SessionError::Transport(format!("malformed element reference: {item}")))
        })
        .collect()
}

/// Session id from a new-session payload
pub fn session_id(value: &Value) -> Result<String, SessionError> {
    value
        .get("sessionId")
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| SessionError::Launch(format!("driver returned no session id: {value}")))
}
