use tokio_util::sync::CancellationToken;

pub fn graceful_shutdown(shutdown: CancellationToken) {
    tokio::spawn(async move {
        ctrlc_or_sigterm().await;
        shutdown.cancel();
    });
}

async fn sigterm() {
    #[cfg(unix)]
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
        Ok(mut signal) => {
            signal.recv().await;
        }
        Err(error) => {
            tracing::warn!(%error, "Can't listen for SIGTERM");
            std::future::pending::<()>().await;
        }
    }

    #[cfg(not(unix))]
    std::future::pending::<()>().await;
}

async fn ctrlc_or_sigterm() {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received Ctrl-C. Shutting down.");
        },
        _ = sigterm() => {
            tracing::info!("Received SIGTERM. Shutting down.");
        }
    }
}
