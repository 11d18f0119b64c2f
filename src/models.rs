use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SOURCE_BY;

/// Query string accepted by `/api/vehicle`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupQuery {
    /// Vehicle registration code, e.g. `MH04KA0151`.
    pub rc: Option<String>,
}

impl LookupQuery {
    /// Builds a query from decoded `key=value` pairs.
    ///
    /// When `rc` is repeated the first occurrence wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            rc: pairs
                .into_iter()
                .find(|(key, _)| key == "rc")
                .map(|(_, value)| value),
        }
    }

    /// Returns the registration code if present and non-empty.
    pub fn rc(&self) -> Option<&str> {
        self.rc.as_deref().filter(|rc| !rc.is_empty())
    }
}

/// Success envelope returned by `/api/vehicle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub error: bool,
    /// The requested registration code, uppercased.
    pub rc: String,
    pub result: Value,
    pub source_by: String,
}

impl LookupResponse {
    pub fn new(rc: &str, result: Value) -> Self {
        Self {
            error: false,
            rc: rc.to_uppercase(),
            result,
            source_by: SOURCE_BY.to_string(),
        }
    }
}

/// Error envelope; `details` carries the underlying failure text when there is one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub source_by: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            details,
            source_by: SOURCE_BY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_query_treats_empty_rc_as_missing() {
        let query = LookupQuery {
            rc: Some(String::new()),
        };
        assert_eq!(query.rc(), None);
        assert_eq!(LookupQuery::default().rc(), None);

        let query = LookupQuery {
            rc: Some("mh04".to_string()),
        };
        assert_eq!(query.rc(), Some("mh04"));
    }

    #[test]
    fn test_lookup_query_first_repeated_rc_wins() {
        let query = LookupQuery::from_pairs(vec![
            ("other".to_string(), "1".to_string()),
            ("rc".to_string(), "mh04".to_string()),
            ("rc".to_string(), "ka01".to_string()),
        ]);
        assert_eq!(query.rc(), Some("mh04"));

        assert_eq!(LookupQuery::from_pairs(vec![]).rc(), None);
    }

    #[test]
    fn test_lookup_response_field_order() {
        let response = LookupResponse::new("mh04ka0151", json!({"a": 1}));
        let body = serde_json::to_string(&response).unwrap();
        assert_eq!(
            body,
            r#"{"error":false,"rc":"MH04KA0151","result":{"a":1},"source_by":"@OsintUchihaProBot"}"#
        );
    }

    #[test]
    fn test_error_response_omits_missing_details() {
        let body = serde_json::to_value(ErrorResponse::new("nope", None)).unwrap();
        assert_eq!(
            body,
            json!({"error": true, "message": "nope", "source_by": "@OsintUchihaProBot"})
        );
    }
}
