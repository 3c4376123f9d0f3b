use axum::{Json, Router, routing::get};
use tower_http::cors::CorsLayer;

use std::sync::Arc;

use api_types::Welcome;
use engine::Engine;

use crate::{expenses, settlements};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the Split App Backend!".to_string(),
    })
}

/// Build the API router around `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/", get(root))
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route(
            "/expenses/{id}",
            axum::routing::put(expenses::update).delete(expenses::delete),
        )
        .route("/people", get(settlements::people))
        .route("/balances", get(settlements::balances))
        .route("/settlements", get(settlements::settlements))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}
