//! Main entrypoint for the signature service.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

use device_store::InMemoryStorer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The address to listen on when `ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging();

    let addr: std::net::SocketAddr = parse_env_var_or("ADDR", DEFAULT_ADDR)?;

    let root_filter = signing_server::init(InMemoryStorer::new());
    let (addr, server) =
        warp::serve(root_filter).try_bind_with_graceful_shutdown(addr, shutdown_signal())?;

    info!(message = "Listening", %addr);
    server.await;
    info!("Shut down");

    Ok(())
}

/// Set up the tracing subscriber, filtered by `RUST_LOG` and defaulting to `info`.
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(true))
        .init();
}

/// A future that resolves when the interrupt signal is received, and panics
/// if the interrupt handler failed to set up.
async fn shutdown_signal() {
    // Wait for the CTRL+C signal
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}

/// Get the value of process environment variable `key` and parse it into the type `T`,
/// falling back to `default` when the variable is not set.
///
/// Returns an error if the value is an invalid unicode, or if the value could not be parsed.
fn parse_env_var_or<T>(
    key: &'static str,
    default: &'static str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    let string = match std::env::var_os(key) {
        Some(raw) => raw
            .into_string()
            .map_err(|_| format!("{} env var is not a valid unicode string", key))?,
        None => default.to_owned(),
    };
    let v = string
        .parse()
        .map_err(|err| format!("{} env var is not valid: {}", key, err))?;
    Ok(v)
}
