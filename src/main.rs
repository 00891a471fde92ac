use tracing_subscriber::{EnvFilter, fmt};

use volunteer_log::shell::config::AppConfig;
use volunteer_log::shell::{build_state, http};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let state = build_state(&config).await?;
    let app = http::router(state);

    tracing::info!(addr = %config.addr, store = %config.store_path.display(), "volunteer log listening");
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
