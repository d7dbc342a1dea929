//! Executing client: one blocking HTTP round-trip per operation.
//!
//! # Design
//! `PostsApi` pairs the pure `PostsClient` with a `ureq` agent and an
//! injected `tracing::Dispatch`. Status interpretation stays in
//! `PostsClient::parse_envelope`, so the agent is built with
//! status-as-error disabled. Every failure emits exactly one `ERROR` event
//! on the injected logger and comes back as `Err`; nothing is retried and
//! the agent's default timeouts are left untouched.

use std::fmt;

use tracing::{debug, dispatcher, error, Dispatch};

use crate::client::PostsClient;
use crate::config::Config;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::PostPayload;

/// Request descriptor used for logging: which operation, against which post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPosts,
    GetPost(u64),
    GetPostComments(u64),
    CreatePost,
    UpdatePost(u64),
    DeletePost(u64),
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::ListPosts => "list_posts",
            Operation::GetPost(_) => "get_post",
            Operation::GetPostComments(_) => "get_post_comments",
            Operation::CreatePost => "create_post",
            Operation::UpdatePost(_) => "update_post",
            Operation::DeletePost(_) => "delete_post",
        }
    }

    pub fn method(self) -> HttpMethod {
        match self {
            Operation::ListPosts | Operation::GetPost(_) | Operation::GetPostComments(_) => {
                HttpMethod::Get
            }
            Operation::CreatePost => HttpMethod::Post,
            Operation::UpdatePost(_) => HttpMethod::Put,
            Operation::DeletePost(_) => HttpMethod::Delete,
        }
    }

    pub fn post_id(self) -> Option<u64> {
        match self {
            Operation::ListPosts | Operation::CreatePost => None,
            Operation::GetPost(id)
            | Operation::GetPostComments(id)
            | Operation::UpdatePost(id)
            | Operation::DeletePost(id) => Some(id),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.post_id() {
            Some(id) => write!(f, "{}(post_id={id})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

/// Blocking client for the posts resource.
#[derive(Clone)]
pub struct PostsApi {
    client: PostsClient,
    agent: ureq::Agent,
    logger: Dispatch,
}

impl fmt::Debug for PostsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostsApi")
            .field("base_url", &self.client.base_url())
            .finish_non_exhaustive()
    }
}

impl PostsApi {
    /// Build a client for `base_url` that reports through `logger`.
    pub fn new(base_url: &str, logger: Dispatch) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            client: PostsClient::new(base_url),
            agent,
            logger,
        }
    }

    pub fn from_config(config: &Config, logger: Dispatch) -> Self {
        Self::new(&config.base_url, logger)
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// GET /posts
    pub fn list_posts(&self) -> Result<Envelope, ApiError> {
        self.run(Operation::ListPosts, Ok(self.client.build_list_posts()))
    }

    /// GET /posts/{id}
    pub fn get_post(&self, id: u64) -> Result<Envelope, ApiError> {
        self.run(Operation::GetPost(id), Ok(self.client.build_get_post(id)))
    }

    /// GET /posts/{id}/comments
    pub fn get_post_comments(&self, id: u64) -> Result<Envelope, ApiError> {
        self.run(
            Operation::GetPostComments(id),
            Ok(self.client.build_post_comments(id)),
        )
    }

    /// POST /posts
    pub fn create_post(&self, input: &PostPayload) -> Result<Envelope, ApiError> {
        self.run(Operation::CreatePost, self.client.build_create_post(input))
    }

    /// PUT /posts/{id}
    pub fn update_post(&self, id: u64, input: &PostPayload) -> Result<Envelope, ApiError> {
        self.run(
            Operation::UpdatePost(id),
            self.client.build_update_post(id, input),
        )
    }

    /// DELETE /posts/{id}
    pub fn delete_post(&self, id: u64) -> Result<Envelope, ApiError> {
        self.run(Operation::DeletePost(id), Ok(self.client.build_delete_post(id)))
    }

    fn run(
        &self,
        op: Operation,
        request: Result<HttpRequest, ApiError>,
    ) -> Result<Envelope, ApiError> {
        let path = request
            .as_ref()
            .map(|req| req.path.clone())
            .unwrap_or_default();
        let result = request
            .and_then(|req| self.execute(req))
            .and_then(|resp| self.client.parse_envelope(resp));

        dispatcher::with_default(&self.logger, || match &result {
            Ok(env) => debug!(
                operation = op.name(),
                post_id = op.post_id(),
                path = %path,
                status = env.status,
                "{} {op} succeeded",
                op.method()
            ),
            Err(err) => error!(
                operation = op.name(),
                post_id = op.post_id(),
                kind = ?err.kind(),
                "{op} failed: {err}"
            ),
        });
        result
    }

    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut response = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&req.path);
                for (name, value) in &req.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            (HttpMethod::Put, body) => {
                let mut builder = self.agent.put(&req.path);
                for (name, value) in &req.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        }?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let bytes = response.body_mut().read_to_vec()?;
        let body = String::from_utf8(bytes).map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
