//! Serves the current working directory over HTTP.
//!
//! # Usage
//!
//! ```bash
//! servedir          # port 8000
//! servedir 9090     # custom port
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use servedir::{serve, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(
    name = "servedir",
    version,
    about = "Serve the current working directory over HTTP"
)]
struct Cli {
    /// Port to listen on
    #[arg(default_value = DEFAULT_PORT)]
    port: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = serve(".", &cli.port).await {
        error!("server error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_8000() {
        let cli = Cli::parse_from(["servedir"]);
        assert_eq!(cli.port, "8000");
    }

    #[test]
    fn test_port_taken_from_first_argument() {
        let cli = Cli::parse_from(["servedir", "9090"]);
        assert_eq!(cli.port, "9090");
    }

    #[test]
    fn test_surplus_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["servedir", "8000", "extra"]).is_err());
    }
}
