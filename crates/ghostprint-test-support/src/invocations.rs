//! Builders for ghostprint invocation strings.

use ghostprint_payload::{SCHEME_PREFIX, TRAILING_DELIMITER};
use serde_json::Value;

/// Wrap `payload` in the scheme envelope the way a browser hand-off would:
/// serialized, percent-encoded, prefixed and terminated.
#[must_use]
pub fn invocation_for(payload: &Value) -> String {
    let text = payload.to_string();
    format!(
        "{SCHEME_PREFIX}{}{TRAILING_DELIMITER}",
        urlencoding::encode(&text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghostprint_payload::{RequestMethod, decode};
    use serde_json::json;

    #[test]
    fn built_invocations_decode_back_to_the_payload() {
        let invocation = invocation_for(&json!({
            "url": "https://records.example/report",
            "requestType": "post",
            "payloadBody": {"caseNumber": 1201},
            "printerName": "Front Desk",
        }));
        let request = decode(&invocation).expect("a built invocation must decode");
        assert_eq!(request.url, "https://records.example/report");
        assert_eq!(request.method, RequestMethod::Post);
        assert_eq!(request.body, Some(json!({"caseNumber": 1201})));
        assert_eq!(request.printer_name.as_deref(), Some("Front Desk"));
    }
}
