//! # servedir
//!
//! A tiny HTTP server for the current working directory.
//!
//! The crate is a thin wiring of two off-the-shelf pieces: an [`axum`]
//! listener loop and [`tower_http`]'s `ServeDir` file service. Request
//! paths resolve against the served root, directory requests are answered
//! with their `index.html`, content types follow file extensions, and
//! missing files or paths that try to escape the root are reported as not
//! found.
//!
//! ## Example
//!
//! ```no_run
//! use servedir::{serve, DEFAULT_PORT};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     // Serve ./ at http://localhost:8000
//!     serve(".", DEFAULT_PORT).await
//! }
//! ```

use std::{io, path::Path};

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

/// Port used when none is given on the command line.
pub const DEFAULT_PORT: &str = "8000";

/// Builds the request handler that serves files beneath `root`.
///
/// The handler is a plain [`Router`] whose fallback service is
/// [`ServeDir`], so every request path is resolved against `root`:
/// directories are answered with their `index.html` (a directory without
/// one is not found), `HEAD` gets the same headers as `GET` without a
/// body, and `..` segments never resolve outside `root`.
pub fn app(root: impl AsRef<Path>) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(TraceLayer::new_for_http())
}

/// Serves `root` over HTTP on `0.0.0.0:<port>`.
///
/// Blocks until the listener fails. Per-request problems (missing files,
/// traversal attempts, unreadable files) are answered with HTTP error
/// statuses and never surface here.
///
/// # Arguments
///
/// * `root` - Directory that request paths are resolved against
/// * `port` - Port string, used verbatim in the listen address
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port already in use,
/// permission denied, or a `port` string that does not name a port) or if
/// it later stops serving.
pub async fn serve(root: impl AsRef<Path>, port: &str) -> io::Result<()> {
    let root = root.as_ref();
    let app = app(root);

    info!("{}", startup_line(root, port));

    let listener = tokio::net::TcpListener::bind(listen_addr(port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Startup message naming the served root and the URL it is reachable at.
fn startup_line(root: &Path, port: &str) -> String {
    format!("serving {} at http://localhost:{port}", root.display())
}

/// Wildcard listen address carrying the port string verbatim.
fn listen_addr(port: &str) -> String {
    format!("0.0.0.0:{port}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr_uses_port_verbatim() {
        assert_eq!(listen_addr("9090"), "0.0.0.0:9090");
    }

    #[test]
    fn test_listen_addr_default_port() {
        assert_eq!(listen_addr(DEFAULT_PORT), "0.0.0.0:8000");
    }

    #[test]
    fn test_startup_line_contains_localhost_url() {
        let line = startup_line(Path::new("."), "9090");
        assert!(line.contains("http://localhost:9090"), "{line}");
    }

    #[test]
    fn test_startup_line_default_port() {
        let line = startup_line(Path::new("."), DEFAULT_PORT);
        assert!(line.contains("http://localhost:8000"), "{line}");
    }
}
