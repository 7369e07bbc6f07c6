// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_type::{Frame, Result, Value, diagnostic::validation::empty_statement, return_error};
use tracing::instrument;

use crate::Engine;

impl Engine {
	/// Run operator-written statement text and return the rows it yields.
	///
	/// The text is passed through untouched. Mutating statements are not
	/// refused; they simply come back with no rows.
	#[instrument(name = "engine::query::execute", level = "info", skip(self, sql), fields(len = sql.len()))]
	pub fn execute(&self, sql: &str) -> Result<Frame> {
		if sql.trim().is_empty() {
			return_error!(empty_statement());
		}
		self.storage.query(sql, &[])
	}

	/// Run a mutating statement with positional parameters, returning the
	/// number of rows it changed.
	#[instrument(name = "engine::query::execute_write", level = "info", skip(self, sql, params), fields(len = sql.len(), params = params.len()))]
	pub fn execute_write(&self, sql: &str, params: &[Value]) -> Result<usize> {
		if sql.trim().is_empty() {
			return_error!(empty_statement());
		}
		self.storage.execute(sql, params)
	}
}
