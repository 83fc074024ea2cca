//! Videogame handlers - Endpoint REST sotto `/api/v1/videogames`

use crate::core::{AppError, AppState};
use crate::dtos::{VideogameDTO, VideogameSearchQuery};
use crate::VIDEOGAMES_PATH;
use axum::{
    extract::{Json, Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/* ordine degli extractor: State, Path, Query, e Json sempre per ultimo perché consuma il body */

#[instrument(skip(state))]
pub async fn list_videogames(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VideogameSearchQuery>, // query params ?name=...
) -> Result<Json<Vec<VideogameDTO>>, AppError> {
    let videogames = match params.name {
        Some(name) => {
            debug!("Searching videogames by name");
            state.videogames.find_by_name_pattern(&name).await?
        }
        None => {
            debug!("Listing all videogames");
            state.videogames.find_all().await?
        }
    };

    info!("Returning {} videogames", videogames.len());
    Ok(Json(videogames.into_iter().map(VideogameDTO::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_videogame(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<VideogameDTO>, AppError> {
    let videogame = state.videogames.find_by_id(id).await?;
    Ok(Json(VideogameDTO::from(videogame)))
}

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_videogame(
    State(state): State<Arc<AppState>>,
    Json(body): Json<VideogameDTO>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.videogames.save(body).await?;
    let location = format!("{}/{}", VIDEOGAMES_PATH, created.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

#[instrument(skip(state, body))]
pub async fn update_videogame(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<VideogameDTO>,
) -> Result<Json<VideogameDTO>, AppError> {
    let updated = state.videogames.update(body, id).await?;
    Ok(Json(VideogameDTO::from(updated)))
}

#[instrument(skip(state))]
pub async fn delete_videogame(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.videogames.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
