use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use sitekit_core::blob::LocalBlobStore;
use sitekit_db::DbPool;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use sitekit_api::config::ServerConfig;
use sitekit_api::state::AppState;
use sitekit_api::{background, bootstrap, router};

/// How long shutdown waits for background jobs to notice cancellation.
const BACKGROUND_DRAIN: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        database_url = %config.database_url,
        blob_dir = %config.blob_dir,
        "Configuration loaded"
    );

    let pool = open_record_store(&config.database_url).await;

    if let Some(seed) = &config.admin_seed {
        bootstrap::seed_admin(&pool, seed)
            .await
            .expect("Failed to seed admin account");
    }

    // Pay the dummy-hash cost before the first unknown-user login.
    sitekit_api::auth::password::dummy_hash();

    let blobs = LocalBlobStore::open(&config.blob_dir)
        .await
        .expect("Failed to open blob store");

    let cancel = CancellationToken::new();
    let cleanup = tokio::spawn(background::session_cleanup::run(
        pool.clone(),
        cancel.clone(),
    ));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        blobs: Arc::new(blobs),
    };
    let app = router::build_app_router(state, &config);

    let ip: IpAddr = config.host.parse().expect("HOST must be an IP address");
    let addr = SocketAddr::new(ip, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");

    tracing::info!("HTTP server stopped, draining background jobs");
    cancel.cancel();
    if tokio::time::timeout(BACKGROUND_DRAIN, cleanup).await.is_err() {
        tracing::warn!("Session cleanup did not stop in time");
    }
    tracing::info!("Shutdown complete");
}

/// `RUST_LOG` wins; otherwise debug for this crate and the HTTP layers.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sitekit_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, probe and migrate the SQLite database, creating the parent
/// directory of a file-backed URL first.
async fn open_record_store(database_url: &str) -> DbPool {
    if let Some(file) = database_url
        .strip_prefix("sqlite:")
        .map(|rest| rest.trim_start_matches("//"))
        .filter(|rest| !rest.starts_with(":memory:"))
    {
        let file = file.split('?').next().unwrap_or(file);
        if let Some(dir) = Path::new(file).parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).expect("Failed to create database directory");
        }
    }

    let pool = sitekit_db::create_pool(database_url)
        .await
        .expect("Failed to open database");
    sitekit_db::health_check(&pool)
        .await
        .expect("Database is not answering");
    sitekit_db::run_migrations(&pool)
        .await
        .expect("Failed to apply migrations");
    tracing::info!("Record store ready");
    pool
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
