//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! - Configurazione
//! - Connessione al database e migrations
//! - Gestione errori
//! - Stato applicazione

pub mod config;
pub mod database;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
