//! VideogameRepository - Repository per la gestione dei videogiochi

use super::{Delete, PoolType, Read, ReadAll, Save};
use crate::dtos::VideogameDTO;
use crate::entities::Videogame;
use sqlx::Error;
use tracing::{debug, info, instrument};

// VIDEOGAME REPOSITORY
pub struct VideogameRepository {
    connection_pool: PoolType,
}

impl VideogameRepository {
    pub fn new(connection_pool: PoolType) -> Self {
        Self { connection_pool }
    }

    /// Find videogames whose name contains `pattern` anywhere (case sensitive).
    /// `%` and `_` in the pattern are matched literally.
    #[instrument(skip(self))]
    pub async fn find_by_name_contains(&self, pattern: &str) -> Result<Vec<Videogame>, Error> {
        debug!("Searching videogames by partial name");
        let videogames = sqlx::query_as::<_, Videogame>(
            r#"
            SELECT id, name, platform, price, release_date
            FROM videogames
            WHERE instr(name, ?) > 0
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} videogames", videogames.len());
        Ok(videogames)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM videogames")
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count)
    }
}

impl ReadAll<Videogame> for VideogameRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Videogame>, Error> {
        debug!("Reading all videogames");
        sqlx::query_as::<_, Videogame>(
            "SELECT id, name, platform, price, release_date FROM videogames ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Read<Videogame, i64> for VideogameRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &i64) -> Result<Option<Videogame>, Error> {
        debug!("Reading videogame by id");
        sqlx::query_as::<_, Videogame>(
            "SELECT id, name, platform, price, release_date FROM videogames WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl Save<Videogame, VideogameDTO> for VideogameRepository {
    #[instrument(skip(self, data), fields(id = ?data.id, name = %data.name))]
    async fn save(&self, data: &VideogameDTO) -> Result<Videogame, Error> {
        let saved = match data.id {
            None => {
                debug!("Inserting new videogame");
                sqlx::query_as::<_, Videogame>(
                    r#"
                    INSERT INTO videogames (name, platform, price, release_date)
                    VALUES (?, ?, ?, ?)
                    RETURNING id, name, platform, price, release_date
                    "#,
                )
                .bind(&data.name)
                .bind(&data.platform)
                .bind(data.price)
                .bind(&data.release_date)
                .fetch_one(&self.connection_pool)
                .await?
            }
            Some(id) => {
                debug!("Upserting videogame with explicit id");
                sqlx::query_as::<_, Videogame>(
                    r#"
                    INSERT INTO videogames (id, name, platform, price, release_date)
                    VALUES (?, ?, ?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        platform = excluded.platform,
                        price = excluded.price,
                        release_date = excluded.release_date
                    RETURNING id, name, platform, price, release_date
                    "#,
                )
                .bind(id)
                .bind(&data.name)
                .bind(&data.platform)
                .bind(data.price)
                .bind(&data.release_date)
                .fetch_one(&self.connection_pool)
                .await?
            }
        };

        info!("Videogame saved with id {}", saved.id);
        Ok(saved)
    }
}

impl Delete<i64> for VideogameRepository {
    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &i64) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM videogames WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        debug!("Deleted {} rows", result.rows_affected());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database;

    async fn test_repo() -> VideogameRepository {
        let pool = database::connect_in_memory().await.unwrap();
        VideogameRepository::new(pool)
    }

    fn draft(name: &str) -> VideogameDTO {
        VideogameDTO {
            id: None,
            name: name.to_string(),
            platform: "Xbox 360".to_string(),
            price: Some(599.0),
            release_date: "01/01/2010".to_string(),
        }
    }

    #[tokio::test]
    async fn save_without_id_assigns_increasing_ids() {
        let repo = test_repo().await;

        let first = repo.save(&draft("Halo 3")).await.unwrap();
        let second = repo.save(&draft("Halo ODST")).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.name, "Halo 3");
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn save_with_existing_id_overwrites_every_column() {
        let repo = test_repo().await;
        let stored = repo.save(&draft("Halo 3")).await.unwrap();

        let mut changed = VideogameDTO::from(stored.clone());
        changed.name = "Halo 3: ODST".to_string();
        changed.price = None;
        changed.release_date = "22/09/2009".to_string();
        let updated = repo.save(&changed).await.unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.price, None);
        assert_eq!(updated.release_date, "22/09/2009");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_at_that_id() {
        let repo = test_repo().await;
        let mut data = draft("Crackdown");
        data.id = Some(500);

        let saved = repo.save(&data).await.unwrap();

        assert_eq!(saved.id, 500);
        assert_eq!(repo.find_by_id(&500).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn find_by_id_missing_returns_none() {
        let repo = test_repo().await;
        assert_eq!(repo.find_by_id(&999_999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_by_name_contains_matches_anywhere_and_is_case_sensitive() {
        let repo = test_repo().await;
        repo.save(&draft("Halo Reach")).await.unwrap();
        repo.save(&draft("Ninja Gaiden 2")).await.unwrap();

        let found = repo.find_by_name_contains("Reach").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Halo Reach");

        assert!(repo.find_by_name_contains("reach").await.unwrap().is_empty());
        assert_eq!(repo.find_by_name_contains("a").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_by_name_contains_treats_wildcards_literally() {
        let repo = test_repo().await;
        repo.save(&draft("Halo Reach")).await.unwrap();
        repo.save(&draft("100% Orange Juice")).await.unwrap();

        let found = repo.find_by_name_contains("%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "100% Orange Juice");
        assert!(repo.find_by_name_contains("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_by_id_removes_row_and_ignores_missing() {
        let repo = test_repo().await;
        let stored = repo.save(&draft("Fable 2")).await.unwrap();

        repo.delete_by_id(&stored.id).await.unwrap();
        assert_eq!(repo.find_by_id(&stored.id).await.unwrap(), None);

        repo.delete_by_id(&stored.id).await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
