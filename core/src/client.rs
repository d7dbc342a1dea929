//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest`; every response goes
//! through the single `parse_envelope`, since all routes share one success
//! rule (any 2xx with a JSON body). `PostsApi` runs the round-trip between
//! the two.

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::PostPayload;

/// Synchronous, stateless request builder for the posts API.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/posts".to_string())
    }

    pub fn build_get_post(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/posts/{id}"))
    }

    pub fn build_post_comments(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/posts/{id}/comments"))
    }

    pub fn build_create_post(&self, input: &PostPayload) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/posts".to_string(), input)
    }

    pub fn build_update_post(&self, id: u64, input: &PostPayload) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, format!("/posts/{id}"), input)
    }

    pub fn build_delete_post(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("/posts/{id}"))
    }

    /// Turn a raw response into an `Envelope`, or the matching `ApiError`.
    ///
    /// An empty 2xx body parses as JSON `null`.
    pub fn parse_envelope(&self, response: HttpResponse) -> Result<Envelope, ApiError> {
        check_status(&response)?;
        let body = if response.body.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?
        };
        Ok(Envelope {
            status: response.status,
            headers: response.headers,
            body,
            text: response.body,
        })
    }

    fn bare(&self, method: HttpMethod, route: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{route}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(
        &self,
        method: HttpMethod,
        route: String,
        input: &PostPayload,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{route}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Any 2xx passes; everything else becomes `HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
