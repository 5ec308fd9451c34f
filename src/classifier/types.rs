//! Request/response payload for SMS classification.

use serde::{Deserialize, Serialize};

/// One SMS and its predicted label.
///
/// Created from the inbound request body; `result` is populated by the
/// server before the response is returned. Lives for one request/response
/// cycle. Serialized with `result: null` while unclassified, which is also
/// the shape the model service expects on its `/predict` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sms {
    /// The SMS text to classify.
    pub sms: String,

    /// Predicted label (e.g. "spam" or "ham"); empty until classification
    /// completes.
    #[serde(default)]
    pub result: Option<String>,
}

impl Sms {
    /// Create an unclassified SMS.
    pub fn new(sms: impl Into<String>) -> Self {
        Self {
            sms: sms.into(),
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inbound_body_without_result_deserializes() {
        let sms: Sms = serde_json::from_str(r#"{"sms":"Let's meet at 5"}"#).unwrap();
        assert_eq!(sms.sms, "Let's meet at 5");
        assert_eq!(sms.result, None);
    }

    #[test]
    fn unclassified_sms_serializes_result_as_null() {
        let json = serde_json::to_value(Sms::new("Win a free prize now!")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sms": "Win a free prize now!", "result": null})
        );
    }

    #[test]
    fn classified_sms_round_trips_label() {
        let mut sms = Sms::new("Win a free prize now!");
        sms.result = Some("spam".to_string());

        let json = serde_json::to_string(&sms).unwrap();
        let back: Sms = serde_json::from_str(&json).unwrap();
        assert_eq!(back.result.as_deref(), Some("spam"));
    }
}
