//! Process lifecycle - turns termination signals into a cancellation
//!
//! The signal listener is the only background task besides the server loop.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Wait for Ctrl+C or SIGTERM. Returns the signal name.
///
/// If a handler cannot be installed that branch never completes; the other
/// one still works.
pub async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}

/// Spawn the signal listener. On a signal it cancels `token`.
///
/// The task also exits quietly if `token` is cancelled by someone else.
pub fn spawn_signal_listener(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            signal = shutdown_signal() => {
                tracing::info!(signal, "Received termination signal, starting shutdown");
                token.cancel();
            }
            _ = token.cancelled() => {}
        }
    })
}
