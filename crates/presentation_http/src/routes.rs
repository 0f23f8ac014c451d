//! Route definitions

use std::path::Path;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::post,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.server.static_dir).to_path_buf();
    let max_body = state.config.server.max_body_size_audio_bytes;

    Router::new()
        // Landing page and static tree (generated portraits live here)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        // Voice pipeline
        .route("/introduce/", post(handlers::voice::introduce))
        .route("/answer/", post(handlers::voice::answer))
        // Character definition and portrait generation
        .route(
            "/create_character/",
            post(handlers::characters::create_character),
        )
        .route(
            "/create_character_image/",
            post(handlers::characters::create_character_image),
        )
        .layer(DefaultBodyLimit::max(max_body))
        // Attach state
        .with_state(state)
}
