use tower_http::trace::TraceLayer;

use dogs_api::shell::config::AppConfig;
use dogs_api::shell::http::router;
use dogs_api::shell::logging::init_logging;
use dogs_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    init_logging();

    let config = AppConfig::from_env()?;
    let state = AppState::seeded(&config);

    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        %addr,
        error_style = ?config.error_style,
        empty_registry_policy = ?config.empty_registry_policy,
        "dog information service listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
