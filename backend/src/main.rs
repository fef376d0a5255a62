use anyhow::Context;
use dotenvy::dotenv;
use noteflow_backend::{build_router, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = ServerConfig::from_env()?;
    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,noteflow_backend=debug,tower_http=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let app = build_router(&config);
    if !config.index_file().exists() {
        tracing::warn!(dir = %config.static_dir.display(), "index.html not found, run `trunk build` in frontend/");
    }

    tracing::info!("Starting server on port {}", config.port);
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server exited with an error")?;
    Ok(())
}
