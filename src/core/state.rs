//! Application State - Stato condiviso dell'applicazione
//!
//! Costruito una sola volta all'avvio: pool -> repository -> service -> state.

use crate::repositories::{PoolType, VideogameRepository};
use crate::services::VideogameService;

/// Stato condiviso tra tutte le route
pub struct AppState {
    /// Service per la gestione del catalogo videogiochi
    pub videogames: VideogameService,
}

impl AppState {
    /// Crea una nuova istanza di AppState a partire dal service già costruito
    pub fn new(videogames: VideogameService) -> Self {
        Self { videogames }
    }

    /// Collega repository e service sopra il pool di connessioni fornito
    pub fn from_pool(pool: PoolType) -> Self {
        Self::new(VideogameService::new(VideogameRepository::new(pool)))
    }
}
