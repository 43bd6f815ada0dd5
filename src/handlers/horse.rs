//! Horse CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{AvailabilityFilter, HorseInput, ListQuery};
use crate::service::HorseService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = AvailabilityFilter::parse(query.dostepnosc.as_deref());
    let horses = HorseService::list(state.store.as_ref(), filter).await?;
    Ok((StatusCode::OK, Json(horses)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let horse = HorseService::get(state.store.as_ref(), id).await?;
    Ok((StatusCode::OK, Json(horse)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<HorseInput>,
) -> Result<impl IntoResponse, AppError> {
    let horse = HorseService::create(state.store.as_ref(), &body).await?;
    Ok((StatusCode::CREATED, Json(horse)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<HorseInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let horse = HorseService::update(state.store.as_ref(), id, &body).await?;
    Ok((StatusCode::OK, Json(horse)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    HorseService::delete(state.store.as_ref(), id).await?;
    Ok((StatusCode::OK, Json(serde_json::json!({ "detail": "horse deleted" }))))
}
