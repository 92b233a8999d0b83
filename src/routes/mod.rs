use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;

mod health;
pub mod todos;

pub use health::health;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/todo", post(todos::routes::create))
        .route("/todos", get(todos::routes::list))
        .route("/todo/{id}", get(todos::routes::get))
        .route("/completed", put(todos::routes::mark_completed))
        .route("/todo/delete", delete(todos::routes::delete))
        .layer(CorsLayer::permissive())
}

async fn root() -> &'static str {
    "Welcome to the Todo API written in Rust"
}
