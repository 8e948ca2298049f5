//! HTTP surface of the music store.
//!
//! This crate wires the repositories from `core-library` into an axum
//! [`Router`]. Both binaries live here: `music-store-api` serves the router,
//! `music-store-seed` fills the database with sample rows.
//!
//! ```rust,ignore
//! let pool = core_library::create_pool(&config.database).await?;
//! let app = core_service::router(AppState::new(pool, config.list_limit));
//! axum::serve(listener, app).await?;
//! ```

pub mod cli;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::{ApiError, Result};
pub use state::AppState;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with tracing and CORS layers applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::docs::routes())
        .nest("/api/artists", routes::artists::routes())
        .nest("/api/albums", routes::albums::routes())
        .nest("/api/genres", routes::genres::routes())
        .nest("/api/tracks", routes::tracks::routes())
        .nest("/api/media-types", routes::media_types::routes())
        .nest("/api/playlists", routes::playlists::routes())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
