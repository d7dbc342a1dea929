//! Synchronous client for a JSON posts/comments REST service.
//!
//! # Overview
//! `PostsClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. `PostsApi` executes one blocking
//! round-trip per operation and returns `Result<Envelope, ApiError>`.
//!
//! # Design
//! - No state survives a call; every operation re-fetches.
//! - The logger is a `tracing::Dispatch` handed to `PostsApi::new`, never the
//!   process-global default.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod types;

pub use api::{Operation, PostsApi};
pub use client::PostsClient;
pub use config::Config;
pub use envelope::Envelope;
pub use error::{ApiError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Comment, Post, PostPayload};
