//! The suite against the bundled mock service, one `#[test]` per case.

use std::net::SocketAddr;
use std::sync::OnceLock;

use posts_core::{PostPayload, PostsApi};
use posts_harness::{mock, suite};
use tracing::Dispatch;

fn api() -> PostsApi {
    static ADDR: OnceLock<SocketAddr> = OnceLock::new();
    let addr = ADDR.get_or_init(|| mock::spawn_mock_server().unwrap());
    PostsApi::new(&format!("http://{addr}"), Dispatch::none())
}

#[test]
fn get_posts() {
    suite::test_get_posts(&api());
}

#[test]
fn get_post_by_id() {
    suite::test_get_post_by_id(&api());
}

#[test]
fn get_post_comments() {
    suite::test_get_post_comments(&api());
}

#[test]
fn create_post() {
    suite::test_create_post(&api());
}

#[test]
fn update_post() {
    suite::test_update_post(&api());
}

#[test]
fn delete_post() {
    suite::test_delete_post(&api());
}

#[test]
fn direct_driver_runs_every_case() {
    suite::run_direct(&api());
}

#[test]
fn create_echoes_a_different_payload() {
    let payload = PostPayload {
        title: "another".to_string(),
        body: "text".to_string(),
        user_id: 4,
    };
    let env = api().create_post(&payload).unwrap();
    assert_eq!(env.status, 201);
    assert_eq!(env.body["title"], "another");
    assert_eq!(env.body["userId"], 4);
}

#[test]
#[should_panic(expected = "get_post returned no result")]
fn wrong_base_path_fails_the_by_id_check() {
    let api = api();
    let misrouted = PostsApi::new(&format!("{}/v2", api.base_url()), Dispatch::none());
    suite::test_get_post_by_id(&misrouted);
}
