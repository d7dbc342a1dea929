//! The six posts-API checks.
//!
//! Every case makes one call (delete makes two), asserts the call produced
//! an envelope, asserts the status, then asserts one meaningful body field.
//! A failed assertion panics and nothing catches it.

use posts_core::{ApiError, Envelope, PostPayload, PostsApi};
use tracing::info;

/// A named check against a live client.
#[derive(Clone, Copy)]
pub struct TestCase {
    pub name: &'static str,
    pub run: fn(&PostsApi),
}

/// All checks in the order the direct driver runs them.
pub const CASES: [TestCase; 6] = [
    TestCase { name: "get_posts", run: test_get_posts },
    TestCase { name: "get_post_by_id", run: test_get_post_by_id },
    TestCase { name: "get_post_comments", run: test_get_post_comments },
    TestCase { name: "create_post", run: test_create_post },
    TestCase { name: "update_post", run: test_update_post },
    TestCase { name: "delete_post", run: test_delete_post },
];

/// Post used by the single-record checks.
pub const POST_ID: u64 = 1;

/// Run every case in order. The first failing assertion ends the run.
pub fn run_direct(api: &PostsApi) {
    info!(base_url = api.base_url(), cases = CASES.len(), "running posts suite");
    for case in CASES {
        info!(case = case.name, "running");
        (case.run)(api);
        info!(case = case.name, "passed");
    }
    info!("all {} cases passed", CASES.len());
}

fn present(result: Result<Envelope, ApiError>, what: &str) -> Envelope {
    match result {
        Ok(env) => env,
        Err(err) => panic!("{what} returned no result: {err}"),
    }
}

pub fn test_get_posts(api: &PostsApi) {
    let env = present(api.list_posts(), "list_posts");
    assert_eq!(env.status, 200, "list_posts status");
    let posts = env.body.as_array().map(Vec::as_slice).unwrap_or_default();
    assert!(!posts.is_empty(), "list_posts returned no posts");
}

pub fn test_get_post_by_id(api: &PostsApi) {
    let env = present(api.get_post(POST_ID), "get_post");
    assert_eq!(env.status, 200, "get_post status");
    assert_eq!(env.body["id"], POST_ID, "get_post id");
}

pub fn test_get_post_comments(api: &PostsApi) {
    let env = present(api.get_post_comments(POST_ID), "get_post_comments");
    assert_eq!(env.status, 200, "get_post_comments status");
    let comments = env.body.as_array().map(Vec::as_slice).unwrap_or_default();
    assert!(!comments.is_empty(), "post {POST_ID} has no comments");
    assert!(
        comments.iter().all(|c| c["postId"] == POST_ID),
        "comment from another post"
    );
}

pub fn test_create_post(api: &PostsApi) {
    let payload = PostPayload::sample();
    let env = present(api.create_post(&payload), "create_post");
    assert_eq!(env.status, 201, "create_post status");
    assert_eq!(env.body["title"], payload.title.as_str(), "create_post title");
    assert!(env.body["id"].is_u64(), "create_post has no server-assigned id");
}

pub fn test_update_post(api: &PostsApi) {
    let payload = PostPayload::sample_update();
    let env = present(api.update_post(POST_ID, &payload), "update_post");
    assert_eq!(env.status, 200, "update_post status");
    assert_eq!(env.body["body"], payload.body.as_str(), "update_post body");
}

/// The follow-up fetch is only required to produce an envelope; the backing
/// service may keep serving the record.
pub fn test_delete_post(api: &PostsApi) {
    let env = present(api.delete_post(POST_ID), "delete_post");
    assert_eq!(env.status, 200, "delete_post status");

    let probe = present(api.get_post(POST_ID), "get_post after delete");
    info!(
        status = probe.status,
        "post {POST_ID} after delete: {}",
        probe.text
    );
}
