// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Route table of the public and admin APIs.

use axum::{
	Router,
	extract::DefaultBodyLimit,
	routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::{config::HttpConfig, handlers, state::AppState};

pub fn router(state: AppState, config: &HttpConfig) -> Router {
	Router::new()
		.route("/health", get(handlers::health))
		.route("/api/recipes", get(handlers::list_recipes))
		.route("/api/recipes/{id}", get(handlers::get_recipe))
		.route("/api/categories", get(handlers::list_categories))
		.route("/api/resources", get(handlers::list_resources))
		.route("/api/calculate", post(handlers::calculate_resources))
		.route("/admin/api/schema", get(handlers::describe_schema))
		.route("/admin/api/schema/{table}", get(handlers::describe_table))
		.route("/admin/api/create-table", post(handlers::create_table))
		.route(
			"/admin/api/table/{table}",
			get(handlers::read_table).post(handlers::insert_row).delete(handlers::drop_table),
		)
		.route("/admin/api/table/{table}/{id}", put(handlers::update_row).delete(handlers::delete_row))
		.route("/admin/api/query", post(handlers::query))
		.route("/admin/api/execute", post(handlers::execute))
		.layer(DefaultBodyLimit::max(config.max_body_size))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
