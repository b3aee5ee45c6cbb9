//! Signal handling for cancelling an in-flight command.

use std::future::Future;
use std::io;

/// Completes with the signal name when SIGTERM or SIGINT (Ctrl+C) arrives.
///
/// If the handlers cannot be installed this never completes, so the command
/// runs to the end instead of being cancelled.
pub async fn shutdown_signal() -> &'static str {
    pending_on_error(wait_for_signal()).await
}

async fn pending_on_error(signal: impl Future<Output = io::Result<&'static str>>) -> &'static str {
    match signal.await {
        Ok(name) => {
            tracing::info!("Received {}, cancelling", name);
            name
        }
        Err(e) => {
            tracing::warn!("Failed to install signal handler: {}", e);
            std::future::pending().await
        }
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> io::Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    Ok(tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    })
}

#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}
