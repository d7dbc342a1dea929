//! The response envelope handed back on success.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Status, parsed JSON body and raw text of a successful (2xx) response.
///
/// The envelope is returned unmodified; typed access goes through `json`.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
    pub text: String,
}

impl Envelope {
    /// Decode the body into a typed DTO.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        T::deserialize(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Post;

    fn envelope(body: serde_json::Value) -> Envelope {
        Envelope {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            text: body.to_string(),
            body,
        }
    }

    #[test]
    fn json_decodes_typed_post() {
        let env = envelope(serde_json::json!({"id": 7, "userId": 1, "title": "t", "body": "b"}));
        let post: Post = env.json().unwrap();
        assert_eq!(post.id, 7);
    }

    #[test]
    fn json_reports_shape_mismatch_as_decode() {
        let env = envelope(serde_json::json!({"id": "seven"}));
        let err = env.json::<Post>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let env = envelope(serde_json::json!({}));
        assert_eq!(env.header("content-type"), Some("application/json"));
        assert_eq!(env.header("x-missing"), None);
    }
}
