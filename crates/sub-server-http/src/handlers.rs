// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! HTTP endpoint handlers.
//!
//! Handlers only decode the request and encode the response; the work itself
//! runs on the blocking pool through [`AppState::blocking`].

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
};
use palcraft_catalog::{TableDef, TableToCreate};
use palcraft_crafting::{CraftingRequest, Recipe, Resource, ResourceTotal, calculate};
use palcraft_type::{Frame, Record, Value, diagnostic::catalog::record_not_found, error};
use serde::{Deserialize, Serialize};

use crate::{
	error::{AppError, JsonBody},
	state::AppState,
};

type HandlerResult<T> = Result<T, AppError>;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
	pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InsertResponse {
	pub message: &'static str,
	pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
	pub message: &'static str,
	pub deleted: usize,
}

#[derive(Debug, Serialize)]
pub struct CreateTableResponse {
	pub message: &'static str,
	pub table: TableDef,
}

/// Rows of a table or raw query, one JSON object per row.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
	pub columns: Vec<String>,
	pub results: Vec<Record>,
	pub count: usize,
}

impl From<Frame> for QueryResponse {
	fn from(frame: Frame) -> Self {
		let results = frame.records();
		Self {
			count: results.len(),
			columns: frame.columns,
			results,
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
	#[serde(default)]
	pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
	#[serde(default)]
	pub query: String,
	#[serde(default)]
	pub params: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
	pub rows_affected: usize,
}

/// Health check endpoint.
///
/// ```json
/// {"status": "ok"}
/// ```
pub async fn health() -> impl IntoResponse {
	(StatusCode::OK, Json(HealthResponse {
		status: "ok",
	}))
}

pub async fn list_recipes(State(state): State<AppState>) -> HandlerResult<Json<Vec<Recipe>>> {
	state.blocking(|s| s.recipes().recipes()).await.map(Json)
}

pub async fn get_recipe(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult<Json<Recipe>> {
	let recipe = state.blocking(move |s| s.recipes().recipe(id)).await?;
	match recipe {
		Some(recipe) => Ok(Json(recipe)),
		None => Err(error!(record_not_found("crafting_recipes", id)).into()),
	}
}

pub async fn list_categories(State(state): State<AppState>) -> HandlerResult<Json<Vec<String>>> {
	state.blocking(|s| s.recipes().categories()).await.map(Json)
}

pub async fn list_resources(State(state): State<AppState>) -> HandlerResult<Json<Vec<Resource>>> {
	state.blocking(|s| s.recipes().resources()).await.map(Json)
}

/// Total resources for a cart.
///
/// ```json
/// {"items": [{"id": 1, "quantity": 2}]}
/// ```
pub async fn calculate_resources(
	State(state): State<AppState>,
	JsonBody(request): JsonBody<CraftingRequest>,
) -> HandlerResult<Json<Vec<ResourceTotal>>> {
	state.blocking(move |s| calculate(s.recipes(), &request)).await.map(Json)
}

pub async fn describe_schema(State(state): State<AppState>) -> HandlerResult<Json<Vec<TableDef>>> {
	state.blocking(|s| s.engine().catalog().describe_schema()).await.map(Json)
}

pub async fn describe_table(State(state): State<AppState>, Path(table): Path<String>) -> HandlerResult<Json<TableDef>> {
	state.blocking(move |s| s.engine().catalog().describe_table(&table)).await.map(Json)
}

/// ```json
/// {"table_name": "pals", "columns": [{"name": "id", "type": "INTEGER", "primary_key": true}]}
/// ```
pub async fn create_table(
	State(state): State<AppState>,
	JsonBody(request): JsonBody<TableToCreate>,
) -> HandlerResult<impl IntoResponse> {
	let table = state.blocking(move |s| s.engine().catalog().create_table(request)).await?;
	Ok((StatusCode::CREATED, Json(CreateTableResponse {
		message: "Table created successfully",
		table,
	})))
}

pub async fn drop_table(State(state): State<AppState>, Path(table): Path<String>) -> HandlerResult<Json<MessageResponse>> {
	state.blocking(move |s| s.engine().catalog().drop_table(&table)).await?;
	Ok(Json(MessageResponse {
		message: "Table dropped successfully",
	}))
}

pub async fn read_table(State(state): State<AppState>, Path(table): Path<String>) -> HandlerResult<Json<QueryResponse>> {
	let frame = state.blocking(move |s| s.engine().read_all(&table)).await?;
	Ok(Json(frame.into()))
}

pub async fn insert_row(
	State(state): State<AppState>,
	Path(table): Path<String>,
	JsonBody(record): JsonBody<Record>,
) -> HandlerResult<impl IntoResponse> {
	let id = state.blocking(move |s| s.engine().insert(&table, record)).await?;
	Ok((StatusCode::CREATED, Json(InsertResponse {
		message: "Record inserted successfully",
		id,
	})))
}

pub async fn update_row(
	State(state): State<AppState>,
	Path((table, id)): Path<(String, i64)>,
	JsonBody(record): JsonBody<Record>,
) -> HandlerResult<Json<MessageResponse>> {
	state.blocking(move |s| s.engine().update_by_id(&table, id, record)).await?;
	Ok(Json(MessageResponse {
		message: "Record updated successfully",
	}))
}

pub async fn delete_row(
	State(state): State<AppState>,
	Path((table, id)): Path<(String, i64)>,
) -> HandlerResult<Json<DeleteResponse>> {
	let deleted = state.blocking(move |s| s.engine().delete_by_id(&table, id)).await?;
	Ok(Json(DeleteResponse {
		message: "Record deleted successfully",
		deleted,
	}))
}

/// Run a row-returning statement.
///
/// ```json
/// {"query": "SELECT * FROM resources"}
/// ```
pub async fn query(
	State(state): State<AppState>,
	JsonBody(request): JsonBody<QueryRequest>,
) -> HandlerResult<Json<QueryResponse>> {
	let frame = state.blocking(move |s| s.engine().execute(&request.query)).await?;
	Ok(Json(frame.into()))
}

/// Run a mutating statement with positional parameters.
///
/// ```json
/// {"query": "DELETE FROM inventory WHERE quantity < ?1", "params": [1]}
/// ```
pub async fn execute(
	State(state): State<AppState>,
	JsonBody(request): JsonBody<ExecuteRequest>,
) -> HandlerResult<Json<ExecuteResponse>> {
	let rows_affected = state.blocking(move |s| s.engine().execute_write(&request.query, &request.params)).await?;
	Ok(Json(ExecuteResponse {
		rows_affected,
	}))
}
