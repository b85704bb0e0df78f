use anyhow::Context;
use regform::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let loaded = match std::env::var("REGFORM_CONFIG") {
        Ok(path) => Config::load(path),
        Err(_) => Config::load_default(),
    };
    let config = loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        Config::default()
    });

    info!(
        storage_key = %config.form.storage_key,
        gate_errors = config.form.gate_errors_on_touch,
        pkg_dir = %config.server.pkg_dir,
        "regform starting"
    );

    let app = regform_server::router(&config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
