//! API server entry point.

use std::process::ExitCode;

use common::ServiceInfo;
use demo_api::{Config, ServerError, telemetry};
use tokio::signal;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

async fn run(config: Config) -> Result<(), ServerError> {
    let metrics_handle = telemetry::install_metrics()?;
    let app = demo_api::create_app(metrics_handle);

    let info = ServiceInfo::CURRENT;
    let addr = config.addr();
    tracing::info!(
        title = info.title,
        description = info.description,
        version = info.version,
        %addr,
        "starting API server"
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let result = match Config::from_env() {
        Ok(config) => {
            telemetry::init_tracing(&config);
            run(config).await
        }
        Err(err) => {
            // Logging still needs a subscriber to report the bad config.
            telemetry::init_tracing(&Config::default());
            Err(ServerError::from(err))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "API server failed");
            ExitCode::FAILURE
        }
    }
}
