use axum_test::TestServer;
use std::sync::Arc;
use videogames::core::{AppState, database};
use videogames::seed;

/// Crea un AppState su un database SQLite in memoria con lo schema applicato
pub async fn create_test_state() -> Arc<AppState> {
    let pool = database::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    Arc::new(AppState::from_pool(pool))
}

/// Come `create_test_state`, ma con i tre videogiochi di esempio già inseriti
pub async fn create_seeded_state() -> Arc<AppState> {
    let state = create_test_state().await;
    seed::preload(&state.videogames)
        .await
        .expect("Failed to preload sample videogames");
    state
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = videogames::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
