//! Wire DTOs for the posts resource.
//!
//! # Design
//! The remote service owns these records; nothing here is cached between
//! calls. Field names follow the service's camelCase JSON.

use serde::{Deserialize, Serialize};

/// A post as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// A comment attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Request payload for create and update. The server assigns `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl PostPayload {
    /// `{title: "foo", body: "bar", userId: 1}`.
    pub fn sample() -> Self {
        Self {
            title: "foo".to_string(),
            body: "bar".to_string(),
            user_id: 1,
        }
    }

    /// `{title: "foo", body: "bar updated", userId: 1}`.
    pub fn sample_update() -> Self {
        Self {
            body: "bar updated".to_string(),
            ..Self::sample()
        }
    }
}
