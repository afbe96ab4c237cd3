use sixdegrees_web::create_router;
use sixdegrees_web::state::AppState;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sixdegrees_web=info,sixdegrees_core=info,tower_http=info")),
        )
        .init();

    info!("Starting sixdegrees web server");

    let state = match AppState::from_env().await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("Failed to initialize app state: {}", e);
            std::process::exit(1);
        }
    };

    let app = create_router(state);

    let addr = std::env::var("SIXDEGREES_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
