// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod create;
mod drop;
mod get;
mod list;

pub use create::{TableToCreate, create_table_sql};
use serde::{Deserialize, Serialize};

/// Column used by the row store when a table has no single primary key.
pub const DEFAULT_ID_COLUMN: &str = "id";

/// One column as the storage engine reports it, or as an operator requests it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
	#[serde(default)]
	pub name: String,
	#[serde(rename = "type", default)]
	pub data_type: String,
	#[serde(default, alias = "notNull")]
	pub not_null: bool,
	/// Literal default clause, empty when the column has none.
	#[serde(default, alias = "defaultValue")]
	pub default_value: String,
	#[serde(default, alias = "primaryKey")]
	pub primary_key: bool,
}

impl ColumnDef {
	pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			data_type: data_type.into(),
			..Default::default()
		}
	}

	pub fn not_null(mut self) -> Self {
		self.not_null = true;
		self
	}

	pub fn primary_key(mut self) -> Self {
		self.primary_key = true;
		self
	}

	pub fn default_value(mut self, literal: impl Into<String>) -> Self {
		self.default_value = literal.into();
		self
	}

	pub fn is_integer(&self) -> bool {
		self.data_type.trim().eq_ignore_ascii_case("INTEGER")
	}

	pub fn default_literal(&self) -> Option<&str> {
		if self.default_value.is_empty() {
			None
		} else {
			Some(&self.default_value)
		}
	}
}

/// A table and its columns in native ordinal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
	pub name: String,
	pub columns: Vec<ColumnDef>,
}

impl TableDef {
	/// The primary key column when exactly one column carries the flag.
	pub fn primary_key(&self) -> Option<&ColumnDef> {
		let mut keys = self.columns.iter().filter(|c| c.primary_key);
		match (keys.next(), keys.next()) {
			(Some(key), None) => Some(key),
			_ => None,
		}
	}

	/// The single primary key if it is declared `INTEGER`, i.e. a rowid alias.
	pub fn integer_primary_key(&self) -> Option<&ColumnDef> {
		self.primary_key().filter(|c| c.is_integer())
	}

	/// Column addressed by update and delete by id.
	pub fn id_column(&self) -> &str {
		self.primary_key().map(|c| c.name.as_str()).unwrap_or(DEFAULT_ID_COLUMN)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn widgets() -> TableDef {
		TableDef {
			name: "widgets".to_string(),
			columns: vec![ColumnDef::new("id", "integer").primary_key(), ColumnDef::new("label", "TEXT").not_null()],
		}
	}

	#[test]
	fn test_single_integer_primary_key() {
		let table = widgets();
		assert_eq!(table.integer_primary_key().map(|c| c.name.as_str()), Some("id"));
		assert_eq!(table.id_column(), "id");
	}

	#[test]
	fn test_text_primary_key_is_id_column_but_not_rowid() {
		let table = TableDef {
			name: "codes".to_string(),
			columns: vec![ColumnDef::new("code", "TEXT").primary_key(), ColumnDef::new("label", "TEXT")],
		};
		assert_eq!(table.id_column(), "code");
		assert!(table.integer_primary_key().is_none());
	}

	#[test]
	fn test_composite_key_falls_back_to_id() {
		let table = TableDef {
			name: "links".to_string(),
			columns: vec![ColumnDef::new("a", "INTEGER").primary_key(), ColumnDef::new("b", "INTEGER").primary_key()],
		};
		assert!(table.primary_key().is_none());
		assert_eq!(table.id_column(), DEFAULT_ID_COLUMN);
	}

	#[test]
	fn test_column_json_accepts_both_spellings() {
		let snake: ColumnDef =
			serde_json::from_str(r#"{"name":"id","type":"INTEGER","primary_key":true,"not_null":false}"#).unwrap();
		let camel: ColumnDef = serde_json::from_str(r#"{"name":"id","type":"INTEGER","primaryKey":true}"#).unwrap();
		assert_eq!(snake, camel);
		assert_eq!(snake.default_literal(), None);

		let json = serde_json::to_value(ColumnDef::new("qty", "INTEGER").default_value("0")).unwrap();
		assert_eq!(json["type"], "INTEGER");
		assert_eq!(json["default_value"], "0");
	}
}
