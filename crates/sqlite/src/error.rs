// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_type::{
	Error,
	diagnostic::{
		catalog::table_already_exists,
		store::{duplicate_entry, execution_failed},
	},
	error,
};
use rusqlite::ffi;

/// Translate a native failure into a diagnostic, keeping the engine's text.
pub(crate) fn map_error(err: rusqlite::Error, statement: &str) -> Error {
	let native = err.to_string();

	let mut diagnostic = match &err {
		rusqlite::Error::SqliteFailure(failure, _)
			if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
				|| failure.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
		{
			duplicate_entry(native)
		}
		rusqlite::Error::SqliteFailure(_, Some(message)) => match existing_table_name(message) {
			Some(table) => table_already_exists(&table, native),
			None => execution_failed(native),
		},
		_ => execution_failed(native),
	};

	diagnostic.with_statement(statement);
	error!(diagnostic)
}

/// Pulls `foo` out of `table foo already exists` / `table "foo" already exists`.
fn existing_table_name(message: &str) -> Option<String> {
	let rest = message.strip_prefix("table ")?;
	let name = rest.strip_suffix(" already exists")?;
	Some(name.trim_matches('"').to_string())
}
