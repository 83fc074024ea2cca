//! Seed - Dati di esempio inseriti a ogni avvio
//!
//! Non è idempotente: con un database su file ogni riavvio aggiunge di nuovo le tre righe.

use crate::dtos::VideogameDTO;
use crate::entities::Videogame;
use crate::services::{VideogameError, VideogameService};
use tracing::info;

fn sample(name: &str, price: f64, release_date: &str) -> VideogameDTO {
    VideogameDTO {
        id: None,
        name: name.to_string(),
        platform: "Xbox 360".to_string(),
        price: Some(price),
        release_date: release_date.to_string(),
    }
}

pub fn samples() -> Vec<VideogameDTO> {
    vec![
        sample("Halo Reach", 899.0, "14/09/2010"),
        sample("Ninja Gaiden 2", 799.0, "03/05/2080"),
        sample("Assassin's Creed 2", 859.0, "17/11/2009"),
    ]
}

/// Inserisce i tre videogiochi di esempio e li logga uno per uno
pub async fn preload(service: &VideogameService) -> Result<Vec<Videogame>, VideogameError> {
    let mut preloaded = Vec::with_capacity(3);
    for data in samples() {
        let saved = service.save(data).await?;
        info!("Preloading: {:?}", saved);
        preloaded.push(saved);
    }
    Ok(preloaded)
}
