//! Turning raw error bodies into a single human-readable message.

use serde_json::Value;

/// Resolves the message for a non-success response.
///
/// Precedence: a non-empty `detail` field of a JSON object body, then the
/// raw body text, then a fallback naming the status code. A `detail` that is
/// not a string (FastAPI sends a list for validation errors) is rendered as
/// compact JSON.
pub fn classify_error_body(status: u16, text: &str) -> String {
    if let Ok(Value::Object(body)) = serde_json::from_str::<Value>(text) {
        if let Some(detail) = body.get("detail").and_then(detail_message) {
            return detail;
        }
    }
    if text.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        text.to_string()
    }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) if items.is_empty() => None,
        Value::Object(fields) if fields.is_empty() => None,
        other => Some(other.to_string()),
    }
}

/// Caps a body for logging.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_wins_over_raw_text() {
        let msg = classify_error_body(404, r#"{"detail": "Application not found"}"#);
        assert_eq!(msg, "Application not found");
    }

    #[test]
    fn empty_detail_falls_back_to_raw_text() {
        let body = r#"{"detail": ""}"#;
        assert_eq!(classify_error_body(400, body), body);
    }

    #[test]
    fn json_without_detail_uses_raw_text() {
        let body = r#"{"error": "boom"}"#;
        assert_eq!(classify_error_body(500, body), body);
    }

    #[test]
    fn non_object_json_uses_raw_text() {
        assert_eq!(classify_error_body(500, "\"oops\""), "\"oops\"");
        assert_eq!(classify_error_body(500, "42"), "42");
    }

    #[test]
    fn malformed_json_uses_raw_text() {
        assert_eq!(classify_error_body(502, "Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn empty_body_names_the_status() {
        let msg = classify_error_body(503, "");
        assert!(msg.contains("503"));
    }

    #[test]
    fn validation_detail_list_is_rendered_as_json() {
        let body = r#"{"detail":[{"loc":["body","status"],"msg":"invalid"}]}"#;
        let msg = classify_error_body(422, body);
        assert!(msg.starts_with('['));
        assert!(msg.contains("invalid"));
    }

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // Byte 2000 falls inside the last kept 'é'.
        let body = format!("a{}", "é".repeat(1500));
        let out = truncate_body(&body);
        let kept = out.strip_suffix("...[truncated]").unwrap();
        assert_eq!(kept.len(), 1999);
        assert!(kept.ends_with('é'));
    }
}
