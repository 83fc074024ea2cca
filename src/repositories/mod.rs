//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//!
//! Le query usano `sqlx::query_as` con bind a runtime e entity `FromRow`:
//! niente `query_as!`, così la build non richiede un database raggiungibile.

pub mod traits;
pub mod videogame;

// alias di tipo per il pool, per semplificare lo switch in caso in cui vogliamo usare un altro db
pub type PoolType = sqlx::SqlitePool;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Delete, Read, ReadAll, Save};

pub use videogame::VideogameRepository;
