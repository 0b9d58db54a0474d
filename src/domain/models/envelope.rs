//! The backend's `{ code, msg, data }` response wrapper.
//!
//! Parsing is deliberately lenient: the envelope is read field by field with
//! explicit presence checks, so a body that is missing, is not an object, or
//! carries fields of the wrong JSON type produces absent fields instead of a
//! decode error. Callers then decide success purely on `code`.

use serde_json::Value;

/// Status code the backend uses for a successful call
pub const SUCCESS_CODE: i64 = 200;

/// Parsed view of a response body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseEnvelope {
    /// Application-level status code
    pub code: Option<i64>,

    /// Human-readable message; empty strings are treated as absent
    pub msg: Option<String>,

    /// Payload; JSON `null` is treated as absent
    pub data: Option<Value>,
}

impl ResponseEnvelope {
    /// Read an envelope out of a response body
    pub fn from_body(body: Option<&Value>) -> Self {
        let Some(fields) = body.and_then(Value::as_object) else {
            return Self::default();
        };

        Self {
            code: fields.get("code").and_then(integral_code),
            msg: fields
                .get("msg")
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty())
                .map(str::to_owned),
            data: fields.get("data").filter(|data| !data.is_null()).cloned(),
        }
    }

    /// True when `code` equals [`SUCCESS_CODE`]
    pub fn is_success(&self) -> bool {
        self.code == Some(SUCCESS_CODE)
    }

    /// The server's message, or `default` when it sent none
    pub fn message_or(&self, default: &str) -> String {
        self.msg.clone().unwrap_or_else(|| default.to_string())
    }

    /// A non-empty string field of an object payload
    pub fn data_str(&self, field: &str) -> Option<&str> {
        self.data
            .as_ref()?
            .get(field)?
            .as_str()
            .filter(|value| !value.is_empty())
    }

    /// The payload itself when it is a non-empty string
    pub fn data_text(&self) -> Option<&str> {
        self.data
            .as_ref()?
            .as_str()
            .filter(|value| !value.is_empty())
    }
}

// JSON numbers compare by value, so `200.0` is the same code as `200`
#[allow(clippy::cast_possible_truncation)]
fn integral_code(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|code| code.fract() == 0.0 && code.abs() < 9.0e15)
            .map(|code| code as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_with_token() {
        let body = json!({"code": 200, "msg": "操作成功", "data": {"token": "abc"}});
        let envelope = ResponseEnvelope::from_body(Some(&body));

        assert!(envelope.is_success());
        assert_eq!(envelope.data_str("token"), Some("abc"));
        assert_eq!(envelope.msg.as_deref(), Some("操作成功"));
    }

    #[test]
    fn test_missing_body_is_empty_envelope() {
        let envelope = ResponseEnvelope::from_body(None);
        assert_eq!(envelope, ResponseEnvelope::default());
        assert!(!envelope.is_success());
    }

    #[test]
    fn test_non_object_body_is_empty_envelope() {
        let body = json!("<html>gateway error</html>");
        assert_eq!(
            ResponseEnvelope::from_body(Some(&body)),
            ResponseEnvelope::default()
        );
    }

    #[test]
    fn test_string_code_is_not_success() {
        let body = json!({"code": "200", "data": {"token": "abc"}});
        assert!(!ResponseEnvelope::from_body(Some(&body)).is_success());
    }

    #[test]
    fn test_float_code_with_integral_value_is_success() {
        let envelope = ResponseEnvelope::from_body(Some(&json!({"code": 200.0})));
        assert_eq!(envelope.code, Some(200));
        assert!(envelope.is_success());

        let envelope = ResponseEnvelope::from_body(Some(&json!({"code": 200.5})));
        assert_eq!(envelope.code, None);
        assert!(!envelope.is_success());
    }

    #[test]
    fn test_empty_msg_falls_back_to_default() {
        let body = json!({"code": 401, "msg": ""});
        let envelope = ResponseEnvelope::from_body(Some(&body));
        assert_eq!(envelope.message_or("fallback"), "fallback");
    }

    #[test]
    fn test_data_str_ignores_empty_and_non_string_values() {
        let body = json!({"code": 200, "data": {"token": "", "role": 7}});
        let envelope = ResponseEnvelope::from_body(Some(&body));
        assert_eq!(envelope.data_str("token"), None);
        assert_eq!(envelope.data_str("role"), None);
        assert_eq!(envelope.data_str("missing"), None);
    }

    #[test]
    fn test_null_data_is_absent() {
        let body = json!({"code": 200, "msg": "操作成功", "data": null});
        let envelope = ResponseEnvelope::from_body(Some(&body));
        assert!(envelope.data.is_none());
        assert_eq!(envelope.data_text(), None);
    }

    #[test]
    fn test_data_text_reads_string_payload() {
        let body = json!({"code": 200, "msg": "操作成功", "data": "注册成功"});
        let envelope = ResponseEnvelope::from_body(Some(&body));
        assert_eq!(envelope.data_text(), Some("注册成功"));
    }

    proptest! {
        #[test]
        fn prop_only_code_200_is_success(code in any::<i64>()) {
            let body = json!({"code": code, "data": {"token": "abc"}});
            let envelope = ResponseEnvelope::from_body(Some(&body));
            prop_assert_eq!(envelope.is_success(), code == SUCCESS_CODE);
        }

        #[test]
        fn prop_arbitrary_text_never_panics(text in ".*") {
            let body = Value::String(text);
            let envelope = ResponseEnvelope::from_body(Some(&body));
            prop_assert!(!envelope.is_success());
        }
    }
}
