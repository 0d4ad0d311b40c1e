use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::{error_reply, ErrorResponse};
use crate::domain::{Card, CardUpdate, Column, NewCard, Priority};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardBody {
    column_id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    client: String,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    owner: String,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    value: f64,
}

impl From<CreateCardBody> for NewCard {
    fn from(body: CreateCardBody) -> Self {
        Self {
            column_id: body.column_id,
            title: body.title,
            description: body.description,
            client_name: body.client,
            due_date: body.due_date,
            owner_name: body.owner,
            priority: body.priority,
            labels: body.labels,
            monetary_value: body.value,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    client: String,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    owner: String,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    value: f64,
}

impl From<UpdateCardBody> for CardUpdate {
    fn from(body: UpdateCardBody) -> Self {
        Self {
            title: body.title,
            description: body.description,
            client_name: body.client,
            due_date: body.due_date,
            owner_name: body.owner,
            priority: body.priority,
            labels: body.labels,
            monetary_value: body.value,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardBody {
    target_column_id: u64,
}

pub async fn list_columns(
    State(state): State<AppState>,
) -> Result<Json<Vec<Column>>, (StatusCode, Json<ErrorResponse>)> {
    let board = state
        .store
        .load()
        .await
        .map_err(|e| error_reply("cardwall.api.list_columns", e))?;

    Ok(Json(board.columns))
}

pub async fn create_card(
    State(state): State<AppState>,
    Json(body): Json<CreateCardBody>,
) -> Result<(StatusCode, Json<Card>), (StatusCode, Json<ErrorResponse>)> {
    let card = state
        .store
        .create_card(body.into())
        .await
        .map_err(|e| error_reply("cardwall.api.create_card", e))?;

    Ok((StatusCode::CREATED, Json(card)))
}

pub async fn move_card(
    State(state): State<AppState>,
    Path(card_id): Path<u64>,
    Json(body): Json<MoveCardBody>,
) -> Result<Json<Card>, (StatusCode, Json<ErrorResponse>)> {
    let card = state
        .store
        .move_card(card_id, body.target_column_id)
        .await
        .map_err(|e| error_reply("cardwall.api.move_card", e))?;

    Ok(Json(card))
}

pub async fn update_card(
    State(state): State<AppState>,
    Path(card_id): Path<u64>,
    Json(body): Json<UpdateCardBody>,
) -> Result<Json<Card>, (StatusCode, Json<ErrorResponse>)> {
    let card = state
        .store
        .update_card(card_id, body.into())
        .await
        .map_err(|e| error_reply("cardwall.api.update_card", e))?;

    Ok(Json(card))
}

pub async fn delete_card(
    State(state): State<AppState>,
    Path(card_id): Path<u64>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    state
        .store
        .delete_card(card_id)
        .await
        .map_err(|e| error_reply("cardwall.api.delete_card", e))?;

    Ok(Json(serde_json::json!({ "success": true })))
}
