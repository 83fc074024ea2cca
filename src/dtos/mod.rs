//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod query;
pub mod videogame;

// Re-exports
pub use query::VideogameSearchQuery;
pub use videogame::VideogameDTO;
