use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

mod handlers;
mod state;
mod upload;

use state::AppState;
use vidomist_pdf::PdfTextProducer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(AppState {
        producer: Box::new(PdfTextProducer),
    });

    // Scanned sheets are a handful of pages; 32 MB leaves headroom
    let body_limit = axum::extract::DefaultBodyLimit::max(32 * 1024 * 1024);

    let app = axum::Router::new()
        .route("/parse", axum::routing::post(handlers::parse))
        .route(
            "/check-students-sheet",
            axum::routing::post(handlers::check_students_sheet),
        )
        .route(
            "/check-individual-slip",
            axum::routing::post(handlers::check_individual_slip),
        )
        .layer(CorsLayer::permissive())
        .layer(body_limit)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
