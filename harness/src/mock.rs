//! Run the bundled mock service on a background thread.

use std::net::SocketAddr;

use tracing::error;

/// Bind an ephemeral local port and serve the mock on its own runtime.
///
/// The server lives until the process exits.
pub fn spawn_mock_server() -> std::io::Result<SocketAddr> {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = std_listener.local_addr()?;
    std_listener.set_nonblocking(true)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::spawn(move || {
        let served = runtime.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener)?;
            mock_server::run(listener).await
        });
        if let Err(err) = served {
            error!(%addr, "mock server stopped: {err}");
        }
    });

    Ok(addr)
}
