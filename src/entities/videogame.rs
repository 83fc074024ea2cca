//! Videogame entity - Riga della tabella `videogames`

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Videogame {
    /// Assegnato dal database all'inserimento, mai dal client
    pub id: i64,
    pub name: String,
    pub platform: String,
    pub price: Option<f64>,
    /// Testo libero, non viene interpretato come data (es. "03/05/2080")
    pub release_date: String,
}
