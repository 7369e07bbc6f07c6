// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_crafting::RecipeStore;
use palcraft_engine::Engine;
use palcraft_type::Result;
use tokio::task::spawn_blocking;

use crate::error::AppError;

/// Handles shared by every request. Both wrap the same storage connection.
#[derive(Clone)]
pub struct AppState {
	engine: Engine,
	recipes: RecipeStore,
}

impl AppState {
	pub fn new(engine: Engine) -> Self {
		let recipes = RecipeStore::new(engine.storage().clone());
		Self {
			engine,
			recipes,
		}
	}

	pub fn engine(&self) -> &Engine {
		&self.engine
	}

	pub fn recipes(&self) -> &RecipeStore {
		&self.recipes
	}

	/// Run a synchronous call on the blocking pool.
	pub async fn blocking<T, F>(&self, f: F) -> std::result::Result<T, AppError>
	where
		T: Send + 'static,
		F: FnOnce(AppState) -> Result<T> + Send + 'static,
	{
		let state = self.clone();
		match spawn_blocking(move || f(state)).await {
			Ok(result) => result.map_err(AppError::from),
			Err(e) => Err(AppError::TaskPanic(e.to_string())),
		}
	}
}
