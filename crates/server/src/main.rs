//! Service Desk REST API Server
//!
//! Serves the ticket tracking API over HTTP. All state lives in process
//! memory: the store is seeded at startup and discarded on exit.

use anyhow::Result;
use axum::Router;
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use desk::ops::TicketService;
use desk::storage::InMemoryStore;
use desk_server::routes;

#[derive(Debug, Parser)]
#[command(name = "desk-server", about = "Service desk ticket tracking API")]
struct Args {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "DESK_ADDR", default_value = "0.0.0.0:3000")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    info!("Starting service desk API server...");

    // Seed the in-memory store and hand it to the service; there is no
    // teardown beyond process exit.
    let store = InMemoryStore::seeded();
    let service = Arc::new(TicketService::new(store));

    // Permissive CORS for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_routes(service))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!("Server listening on http://{}", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
