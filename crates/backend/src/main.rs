pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    use crate::api::AppState;
    use crate::system::middleware::request_logger::request_logger;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let addr = config.socket_addr()?;
    let static_dir = config.static_dir();
    if let Some(seed) = config.mock.seed {
        tracing::info!("Mock data seeded with {}", seed);
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let state = Arc::new(AppState::new(config));
    let app = routes::configure_routes(state)
        .fallback_service(ServeDir::new(&static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    tracing::info!("Serving static files from {}", static_dir.display());
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
