//! Handlers module - Endpoint HTTP
//!
//! Ogni handler è stateless: estrae i parametri, chiama il service e traduce il risultato.

pub mod videogame;

pub use videogame::{
    create_videogame, delete_videogame, get_videogame, list_videogames, update_videogame,
};
