//! Videogame DTOs - Rappresentazione JSON di un videogioco

use crate::entities::Videogame;
use serde::{Deserialize, Serialize};

/// Forma JSON scambiata col client:
/// `{ "id", "name", "platform", "price", "releaseDate" }`
///
/// Usato anche come input per il salvataggio: `id == None` significa inserimento,
/// `id == Some(_)` significa upsert sulla riga con quell'id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideogameDTO {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub platform: String,
    #[serde(default)]
    pub price: Option<f64>,
    pub release_date: String,
}

impl VideogameDTO {
    /// Copia del DTO senza identità, pronta per un inserimento
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }
}

impl From<Videogame> for VideogameDTO {
    fn from(value: Videogame) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            platform: value.platform,
            price: value.price,
            release_date: value.release_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_release_date_in_camel_case() {
        let dto = VideogameDTO::from(Videogame {
            id: 7,
            name: "Halo Reach".to_string(),
            platform: "Xbox 360".to_string(),
            price: None,
            release_date: "14/09/2010".to_string(),
        });

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Halo Reach",
                "platform": "Xbox 360",
                "price": null,
                "releaseDate": "14/09/2010"
            })
        );
    }

    #[test]
    fn missing_id_and_price_deserialize_as_none() {
        let dto: VideogameDTO = serde_json::from_value(json!({
            "name": "Gears of War",
            "platform": "Xbox 360",
            "releaseDate": "07/11/2006"
        }))
        .unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.price, None);
        assert_eq!(dto.release_date, "07/11/2006");
    }

    #[test]
    fn without_id_drops_client_identity() {
        let dto = VideogameDTO {
            id: Some(42),
            name: "Fable 2".to_string(),
            platform: "Xbox 360".to_string(),
            price: Some(499.0),
            release_date: "21/10/2008".to_string(),
        }
        .without_id();

        assert_eq!(dto.id, None);
        assert_eq!(dto.name, "Fable 2");
    }
}
