// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Turns operator-supplied records into column lists and bound values.

use palcraft_catalog::TableDef;
use palcraft_type::{
	Record, Result, Value,
	diagnostic::validation::{nothing_to_insert, nothing_to_update},
	return_error,
};

/// Columns to name in a statement and the values bound to them, position for
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedWrite {
	pub columns: Vec<String>,
	pub values: Vec<Value>,
}

impl PreparedWrite {
	fn with_capacity(capacity: usize) -> Self {
		Self {
			columns: Vec::with_capacity(capacity),
			values: Vec::with_capacity(capacity),
		}
	}

	fn push(&mut self, column: String, value: Value) {
		self.columns.push(column);
		self.values.push(normalize(value));
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}
}

/// Prepare an INSERT into `table`.
///
/// A single `INTEGER` primary key given as null, `""` or zero is left out so
/// the engine assigns it. Any other value for it is kept as an explicit id.
pub fn prepare_insert(table: &TableDef, record: Record) -> Result<PreparedWrite> {
	let rowid = table.integer_primary_key().map(|c| c.name.as_str());

	let mut prepared = PreparedWrite::with_capacity(record.len());
	for (column, value) in record {
		if Some(column.as_str()) == rowid && is_unassigned_id(&value) {
			continue;
		}
		prepared.push(column, value);
	}

	if prepared.is_empty() {
		return_error!(nothing_to_insert(&table.name));
	}
	Ok(prepared)
}

/// Prepare the SET list of an UPDATE. `id_field` is never written.
pub fn prepare_update(table: &str, record: Record, id_field: &str) -> Result<PreparedWrite> {
	let mut prepared = PreparedWrite::with_capacity(record.len());
	for (column, value) in record {
		if column == id_field {
			continue;
		}
		prepared.push(column, value);
	}

	if prepared.is_empty() {
		return_error!(nothing_to_update(table));
	}
	Ok(prepared)
}

fn is_unassigned_id(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Integer(0) => true,
		Value::Float(v) => *v == 0.0,
		Value::Text(s) => s.is_empty() || s == "0",
		_ => false,
	}
}

/// Empty strings bind as null.
fn normalize(value: Value) -> Value {
	if value.is_empty_text() { Value::Null } else { value }
}
