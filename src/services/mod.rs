//! Services module - Logica applicativa sopra i repository

pub mod videogame;

pub use videogame::{VideogameError, VideogameService};
