//! Task board HTTP server.
//!
//! Startup order:
//! 1. Read configuration from `TASKBOARD_*` environment variables.
//! 2. Install the tracing subscriber.
//! 3. Open the Postgres store (applying the schema) or fall back to the
//!    in-memory store when no database URL is configured.
//! 4. Serve the task API until SIGINT or SIGTERM.

use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};
use std::{net::SocketAddr, sync::Arc};
use taskboard::{
    config::Config,
    http::{self, AppState},
    task::{
        adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
        ports::TaskRepository,
    },
    telemetry,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    telemetry::init(&config);
    info!(version = env!("CARGO_PKG_VERSION"), "taskboard-server starting");

    let repository = open_repository(&config).await?;
    let authenticator = Arc::new(config.authenticator());
    if authenticator.is_empty() {
        warn!("TASKBOARD_API_TOKENS is empty; every task request will be rejected");
    }

    let state = Arc::new(AppState::new(
        repository,
        authenticator,
        config.max_page_limit,
    ));
    let app = http::build(state);

    let addr: SocketAddr = config.bind_address.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("taskboard-server stopped");
    Ok(())
}

async fn open_repository(config: &Config) -> anyhow::Result<Arc<dyn TaskRepository>> {
    let Some(database_url) = config.database_url.as_deref() else {
        info!("no database configured; using the in-memory task store");
        return Ok(Arc::new(InMemoryTaskRepository::new()));
    };

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = tokio::task::spawn_blocking(move || Pool::builder().build(manager)).await??;
    let repository = PostgresTaskRepository::new(pool);
    repository.apply_schema().await?;
    info!("postgres task store ready");
    Ok(Arc::new(repository))
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => warn!(error = %err, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
