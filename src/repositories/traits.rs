//! Common repository traits
//!
//! This module defines generic interfaces for database operations.

/// Trait for reading every row of a table
///
/// # Type Parameters
/// * `Entity` - Type of the entities to read
pub trait ReadAll<Entity> {
    /// Reads all the entities, in natural storage order
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - Every entity in the table (can be empty)
    /// * `Err(sqlx::Error)` - Error during reading
    async fn find_all(&self) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `i64`)
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn find_by_id(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for inserting or overwriting entities
///
/// # Type Parameters
/// * `Entity` - Type of the persisted entity (with ID assigned by the database)
/// * `SaveDTO` - DTO carrying an optional ID
pub trait Save<Entity, SaveDTO> {
    /// Persists the data
    ///
    /// Without an ID a new row is inserted and the database assigns the key;
    /// with an ID every column of that row is overwritten, inserting it if missing.
    ///
    /// # Returns
    /// * `Ok(Entity)` - Persisted entity, as stored
    /// * `Err(sqlx::Error)` - Error during the write
    async fn save(&self, data: &SaveDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// Deletes an entity from the database
    ///
    /// Deleting a missing ID is not an error: callers check existence first.
    async fn delete_by_id(&self, id: &Id) -> Result<(), sqlx::Error>;
}
