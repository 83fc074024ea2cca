//! Videogames - API REST per il catalogo dei videogiochi
//!
//! Espone i moduli principali anche per i test di integrazione.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod repositories;
pub mod seed;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config};

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Path base delle risorse videogioco
pub const VIDEOGAMES_PATH: &str = "/api/v1/videogames";

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(configure_videogame_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes per la gestione dei videogiochi
fn configure_videogame_routes() -> Router<Arc<AppState>> {
    use handlers::*;

    Router::new()
        .route(VIDEOGAMES_PATH, get(list_videogames).post(create_videogame))
        .route(
            "/api/v1/videogames/{id}",
            get(get_videogame)
                .put(update_videogame)
                .delete(delete_videogame),
        )
}
