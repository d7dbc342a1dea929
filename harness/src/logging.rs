//! Subscriber construction. The result is handed around as a `Dispatch`
//! rather than installed globally.

use tracing::Dispatch;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directive used for `--verbose`.
pub const VERBOSE_FILTER: &str = "posts_core=debug,posts_harness=debug,info";

/// Build a fmt subscriber. `RUST_LOG` wins over `default_filter` unless `verbose`.
pub fn dispatch(default_filter: &str, verbose: bool) -> Dispatch {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };

    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter);
    Dispatch::new(subscriber)
}
