//! Assertion suite for the posts client, plus the two ways to drive it.
//!
//! # Overview
//! `suite` holds the test cases as plain functions over `&PostsApi`; each one
//! panics on its first failed assertion. `suite::run_direct` calls them in
//! order in-process. `runner::ExternalRunner` instead shells out to
//! `cargo test` on the `live` test target and reports captured output.

pub mod logging;
pub mod mock;
pub mod runner;
pub mod suite;

pub use runner::{ExternalRunner, RunOutput, RunnerError};
pub use suite::{run_direct, TestCase, CASES};
