//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database.

pub mod videogame;

// Re-exports per facilitare l'import
pub use videogame::Videogame;
