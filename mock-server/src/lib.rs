//! In-process stand-in for the public posts service.
//!
//! Serves 100 seeded posts with 5 comments each. Writes are acknowledged
//! with the same status codes and echo bodies as the public service, but
//! nothing is ever stored: a deleted post is still there on the next GET.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const POST_COUNT: u64 = 100;
pub const COMMENTS_PER_POST: u64 = 5;

/// Id the service hands out for every created post.
pub const CREATED_ID: u64 = POST_COUNT + 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

pub struct Store {
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Store {
    pub fn seeded() -> Self {
        let posts = (1..=POST_COUNT)
            .map(|id| Post {
                user_id: (id - 1) / 10 + 1,
                id,
                title: format!("post title {id}"),
                body: format!("post body {id}"),
            })
            .collect();
        let comments = (1..=POST_COUNT * COMMENTS_PER_POST)
            .map(|id| Comment {
                post_id: (id - 1) / COMMENTS_PER_POST + 1,
                id,
                name: format!("comment {id}"),
                email: format!("commenter{id}@example.com"),
                body: format!("comment body {id}"),
            })
            .collect();
        Self { posts, comments }
    }

    fn post(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }
}

pub type Db = Arc<Store>;

pub fn app() -> Router {
    let db: Db = Arc::new(Store::seeded());
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/posts/{id}/comments", get(list_comments))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.posts.clone())
}

async fn get_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Post>, (StatusCode, Json<Value>)> {
    db.post(id).cloned().map(Json).ok_or_else(not_found)
}

async fn list_comments(State(db): State<Db>, Path(id): Path<u64>) -> Json<Vec<Comment>> {
    let comments = db
        .comments
        .iter()
        .filter(|c| c.post_id == id)
        .cloned()
        .collect();
    Json(comments)
}

async fn create_post(Json(input): Json<PostInput>) -> (StatusCode, Json<Post>) {
    let post = Post {
        user_id: input.user_id,
        id: CREATED_ID,
        title: input.title,
        body: input.body,
    };
    (StatusCode::CREATED, Json(post))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, (StatusCode, Json<Value>)> {
    db.post(id).ok_or_else(not_found)?;
    Ok(Json(Post {
        user_id: input.user_id,
        id,
        title: input.title,
        body: input.body,
    }))
}

async fn delete_post(Path(_id): Path<u64>) -> Json<Value> {
    Json(json!({}))
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({})))
}
