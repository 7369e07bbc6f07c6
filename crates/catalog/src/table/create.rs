// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_type::{
	Result,
	diagnostic::validation::{
		column_missing_name, column_missing_type, empty_table_name, invalid_column_type, no_columns_defined,
	},
	return_error,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
	Catalog,
	identifier::{IdentifierKind, is_valid_type, quote},
	table::{ColumnDef, TableDef},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableToCreate {
	#[serde(rename = "table_name", alias = "tableName", default)]
	pub table: String,
	#[serde(default)]
	pub columns: Vec<ColumnDef>,
}

impl Catalog {
	/// Create a table from operator-supplied column definitions.
	///
	/// Duplicate names are not pre-checked; the engine's refusal surfaces as a
	/// conflict.
	#[instrument(name = "catalog::table::create", level = "info", skip(self, to_create), fields(
		table = %to_create.table,
		columns = to_create.columns.len()
	))]
	pub fn create_table(&self, to_create: TableToCreate) -> Result<TableDef> {
		let sql = create_table_sql(&to_create)?;
		debug!(%sql, "creating table");
		// Only the first statement is compiled, so a default literal cannot chain another.
		self.storage.execute(&sql, &[])?;
		self.describe_table(&to_create.table)
	}
}

/// Build the `CREATE TABLE` statement for `to_create`, validating every
/// identifier and type before it is interpolated.
pub fn create_table_sql(to_create: &TableToCreate) -> Result<String> {
	if to_create.table.is_empty() {
		return_error!(empty_table_name());
	}
	let table = quote(IdentifierKind::Table, &to_create.table)?;

	if to_create.columns.is_empty() {
		return_error!(no_columns_defined(&to_create.table));
	}

	let mut definitions = Vec::with_capacity(to_create.columns.len());
	for (position, column) in to_create.columns.iter().enumerate() {
		definitions.push(column_definition(&to_create.table, position, column)?);
	}

	Ok(format!("CREATE TABLE {} ({})", table, definitions.join(", ")))
}

fn column_definition(table: &str, position: usize, column: &ColumnDef) -> Result<String> {
	if column.name.is_empty() {
		return_error!(column_missing_name(table, position));
	}
	if column.data_type.trim().is_empty() {
		return_error!(column_missing_type(table, &column.name));
	}

	let name = quote(IdentifierKind::Column, &column.name)?;
	if !is_valid_type(&column.data_type) {
		return_error!(invalid_column_type(&column.name, &column.data_type));
	}

	let mut definition = format!("{} {}", name, column.data_type.trim());

	if column.primary_key {
		definition.push_str(" PRIMARY KEY");
		if column.is_integer() {
			definition.push_str(" AUTOINCREMENT");
		}
	} else if column.not_null {
		definition.push_str(" NOT NULL");
	}

	if let Some(literal) = column.default_literal() {
		definition.push_str(" DEFAULT ");
		definition.push_str(literal);
	}

	Ok(definition)
}

#[cfg(test)]
mod tests {
	use palcraft_testing::fixture::storage;
	use palcraft_type::{
		ErrorKind,
		diagnostic::{catalog, validation},
	};

	use super::*;

	fn to_create(table: &str, columns: Vec<ColumnDef>) -> TableToCreate {
		TableToCreate {
			table: table.to_string(),
			columns,
		}
	}

	#[test]
	fn test_integer_primary_key_autoincrements() {
		let sql = create_table_sql(&to_create(
			"widgets",
			vec![ColumnDef::new("id", "INTEGER").primary_key(), ColumnDef::new("label", "TEXT").not_null()],
		))
		.unwrap();
		assert_eq!(
			sql,
			r#"CREATE TABLE "widgets" ("id" INTEGER PRIMARY KEY AUTOINCREMENT, "label" TEXT NOT NULL)"#
		);
	}

	#[test]
	fn test_text_primary_key_has_no_autoincrement() {
		let sql = create_table_sql(&to_create("codes", vec![ColumnDef::new("code", "TEXT").primary_key().not_null()]))
			.unwrap();
		assert_eq!(sql, r#"CREATE TABLE "codes" ("code" TEXT PRIMARY KEY)"#);
	}

	#[test]
	fn test_default_literal_is_appended_verbatim() {
		let sql = create_table_sql(&to_create(
			"stock",
			vec![
				ColumnDef::new("qty", "INTEGER").not_null().default_value("0"),
				ColumnDef::new("note", "TEXT").default_value("'none'"),
			],
		))
		.unwrap();
		assert_eq!(sql, r#"CREATE TABLE "stock" ("qty" INTEGER NOT NULL DEFAULT 0, "note" TEXT DEFAULT 'none')"#);
	}

	#[test]
	fn test_empty_table_name() {
		let err = create_table_sql(&to_create("", vec![ColumnDef::new("id", "INTEGER")])).unwrap_err();
		assert_eq!(err.diagnostic().code, validation::EMPTY_TABLE_NAME);
	}

	#[test]
	fn test_no_columns() {
		let err = create_table_sql(&to_create("widgets", vec![])).unwrap_err();
		assert_eq!(err.diagnostic().code, validation::NO_COLUMNS_DEFINED);
	}

	#[test]
	fn test_column_without_name_or_type() {
		let err = create_table_sql(&to_create("widgets", vec![ColumnDef::new("", "TEXT")])).unwrap_err();
		assert_eq!(err.diagnostic().code, validation::COLUMN_MISSING_NAME);

		let err = create_table_sql(&to_create("widgets", vec![ColumnDef::new("label", " ")])).unwrap_err();
		assert_eq!(err.diagnostic().code, validation::COLUMN_MISSING_TYPE);
	}

	#[test]
	fn test_rejects_injected_identifiers_and_types() {
		let err = create_table_sql(&to_create("w; DROP TABLE x", vec![ColumnDef::new("id", "INTEGER")])).unwrap_err();
		assert_eq!(err.diagnostic().code, catalog::INVALID_IDENTIFIER);

		let err = create_table_sql(&to_create("w", vec![ColumnDef::new("a\"b", "INTEGER")])).unwrap_err();
		assert_eq!(err.diagnostic().code, catalog::INVALID_IDENTIFIER);

		let err = create_table_sql(&to_create("w", vec![ColumnDef::new("a", "TEXT); DROP TABLE x; --")])).unwrap_err();
		assert_eq!(err.diagnostic().code, validation::INVALID_COLUMN_TYPE);
	}

	#[test]
	fn test_create_table_returns_live_descriptor() {
		let catalog = Catalog::new(storage());
		let table = catalog
			.create_table(to_create(
				"widgets",
				vec![ColumnDef::new("id", "INTEGER").primary_key(), ColumnDef::new("label", "TEXT").not_null()],
			))
			.unwrap();

		assert_eq!(table.name, "widgets");
		assert_eq!(table.columns.len(), 2);
		assert!(table.columns[0].primary_key);
		assert!(table.columns[1].not_null);
		assert!(catalog.table_exists("widgets").unwrap());
	}

	#[test]
	fn test_create_existing_table_is_conflict() {
		let catalog = Catalog::new(storage());
		let columns = vec![ColumnDef::new("id", "INTEGER").primary_key()];
		catalog.create_table(to_create("widgets", columns.clone())).unwrap();

		let err = catalog.create_table(to_create("widgets", columns)).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Conflict);
		assert_eq!(err.diagnostic().code, catalog::TABLE_ALREADY_EXISTS);
	}

	#[test]
	fn test_default_literal_cannot_smuggle_a_second_statement() {
		let catalog = Catalog::new(storage());
		catalog.create_table(to_create("keep", vec![ColumnDef::new("id", "INTEGER").primary_key()])).unwrap();

		// Refused or ignored depending on the engine build; never run.
		let _ = catalog.create_table(to_create(
			"widgets",
			vec![ColumnDef::new("qty", "INTEGER").default_value("0); DROP TABLE keep; --")],
		));
		assert!(catalog.table_exists("keep").unwrap());
	}

	#[test]
	fn test_request_body_shape() {
		let to_create: TableToCreate = serde_json::from_str(
			r#"{"table_name":"pals","columns":[{"name":"id","type":"INTEGER","primary_key":true}]}"#,
		)
		.unwrap();
		assert_eq!(to_create.table, "pals");
		assert!(to_create.columns[0].primary_key);
	}
}
