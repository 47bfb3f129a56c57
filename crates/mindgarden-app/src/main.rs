use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info, warn};

use mindgarden_app::presentation::{build_router, build_state, sqlite_repositories};
use mindgarden_domain::shared::SystemClock;
use mindgarden_infrastructure::config::AppConfig;
use mindgarden_infrastructure::logging::init_logger;
use mindgarden_infrastructure::persistence::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();
    init_logger(&config.log_dir).context("Failed to initialize logger")?;

    info!(
        environment = %config.environment,
        database = %config.database_path.display(),
        "Starting MindGarden API"
    );

    let db = Database::new(&config.database_url_path(), &config.timeouts)
        .await
        .context("Failed to open database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    info!("✓ Database ready");

    let state = build_state(
        sqlite_repositories(db.shared_pool()),
        Arc::new(SystemClock),
        config.environment,
    );
    let app = build_router(state, &config);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = shutdown_tx.send(true);
            })
            .await
    };

    // In-flight requests get `shutdown_grace` to finish once a signal arrives.
    let grace = config.timeouts.shutdown_grace;
    let deadline = async move {
        if shutdown_rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => result.context("Server error")?,
        _ = deadline => warn!(
            grace_secs = grace.as_secs(),
            "Shutdown grace period elapsed with requests in flight"
        ),
    }

    db.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
