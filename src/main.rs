use f1_api::{
    api::{create_router, AppState},
    config::Config,
    db::{create_pool, PgExecutor},
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("f1_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Connections are opened on first use
    let pool = create_pool(&config);
    let state = AppState::new(PgExecutor::new(pool));

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("API running on http://localhost:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
