use anyhow::{Context, Result};
use email_service::{config::Config, db, notifier, telemetry, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::debug!(environment = ?config.environment, notifier = ?config.notifier, "configuration loaded");

    let pool = db::connect(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| format!("cannot open database {}", config.database_url))?;

    let seeded = db::prepare(&pool).await.context("database setup failed")?;
    tracing::info!(seeded, "schema ensured");

    let notifier = notifier::from_config(&config)?;
    tracing::info!(notifier = notifier.name(), "mail notifier ready");

    let expose_docs = config.environment.exposes_api_docs();
    let app = email_service::build_router(AppState::new(pool.clone(), notifier), expose_docs);
    if expose_docs {
        tracing::info!(path = email_service::routes::docs::OPENAPI_PATH, "api docs enabled");
    }

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;
    let ctrl_c = async {
        signal::ctrl_c().await.ok();
    };
    #[cfg(unix)]
    let term = async {
        if let Ok(mut s) = signal::unix::signal(signal::unix::SignalKind::terminate()) {
            s.recv().await;
        }
    };
    #[cfg(not(unix))]
    let term = std::future::pending::<()>();
    tokio::select! { _ = ctrl_c => {}, _ = term => {} }
}
