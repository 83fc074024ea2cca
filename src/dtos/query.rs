//! Query DTOs - Data Transfer Objects per query di ricerca

use serde::{Deserialize, Serialize};

/// DTO per query parameters di ricerca videogiochi (`?name=...`)
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct VideogameSearchQuery {
    #[serde(default)]
    pub name: Option<String>,
}
