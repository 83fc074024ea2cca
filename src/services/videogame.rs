//! Videogame service - Orchestrazione delle operazioni sul catalogo

use crate::dtos::VideogameDTO;
use crate::entities::Videogame;
use crate::repositories::{Delete, Read, ReadAll, Save, VideogameRepository};
use tracing::{debug, info, instrument, warn};

/// Errori di dominio del catalogo
#[derive(Debug, thiserror::Error)]
pub enum VideogameError {
    #[error("No existe ningún videojuego con id: {0}")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct VideogameService {
    repository: VideogameRepository,
}

impl VideogameService {
    pub fn new(repository: VideogameRepository) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> Result<Vec<Videogame>, VideogameError> {
        Ok(self.repository.find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Videogame, VideogameError> {
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or(VideogameError::NotFound(id))
    }

    /// Nessun risultato non è un errore: ritorna una lista vuota
    pub async fn find_by_name_pattern(&self, name: &str) -> Result<Vec<Videogame>, VideogameError> {
        Ok(self.repository.find_by_name_contains(name).await?)
    }

    /// Inserisce sempre una nuova riga: l'id eventualmente inviato dal client viene ignorato
    #[instrument(skip(self, data), fields(name = %data.name))]
    pub async fn save(&self, data: VideogameDTO) -> Result<Videogame, VideogameError> {
        let created = self.repository.save(&data.without_id()).await?;
        info!("Videogame created with id {}", created.id);
        Ok(created)
    }

    /// Aggiorna `name`, `platform` e `price` della riga esistente, `release_date` resta invariato.
    ///
    /// Se l'id non esiste il body viene salvato così com'è (upsert sul suo id, oppure
    /// inserimento con id generato) invece di segnalare NotFound.
    #[instrument(skip(self, data))]
    pub async fn update(&self, data: VideogameDTO, id: i64) -> Result<Videogame, VideogameError> {
        match self.repository.find_by_id(&id).await? {
            Some(existing) => {
                debug!("Updating existing videogame");
                let mut merged = VideogameDTO::from(existing);
                merged.name = data.name;
                merged.platform = data.platform;
                merged.price = data.price;
                Ok(self.repository.save(&merged).await?)
            }
            None => {
                warn!("Videogame {} not found, saving request body as a new record", id);
                Ok(self.repository.save(&data).await?)
            }
        }
    }

    pub async fn count(&self) -> Result<i64, VideogameError> {
        Ok(self.repository.count().await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), VideogameError> {
        if self.repository.find_by_id(&id).await?.is_none() {
            return Err(VideogameError::NotFound(id));
        }

        self.repository.delete_by_id(&id).await?;
        info!("Videogame {} deleted", id);
        Ok(())
    }
}
