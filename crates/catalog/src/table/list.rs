// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_type::{ErrorKind, Result, Value};
use tracing::instrument;

use crate::{Catalog, table::TableDef};

const LIST_TABLES: &str =
	"SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name";

const TABLE_EXISTS: &str =
	"SELECT 1 FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name = ?1 COLLATE NOCASE";

impl Catalog {
	/// Names of all user tables, sorted. Engine-internal tables are excluded.
	#[instrument(name = "catalog::table::list", level = "debug", skip(self))]
	pub fn list_tables(&self) -> Result<Vec<String>> {
		let frame = self.storage.query(LIST_TABLES, &[])?;
		Ok(frame.rows.into_iter().filter_map(|row| row.into_iter().next()).map(|name| name.to_string()).collect())
	}

	pub fn table_exists(&self, table: &str) -> Result<bool> {
		let frame = self.storage.query(TABLE_EXISTS, &[Value::text(table)])?;
		Ok(!frame.is_empty())
	}

	/// Every user table with its columns, ordered by table name.
	///
	/// A table dropped between listing and describing is skipped.
	#[instrument(name = "catalog::table::describe_schema", level = "debug", skip(self))]
	pub fn describe_schema(&self) -> Result<Vec<TableDef>> {
		let mut result = Vec::new();
		for table in self.list_tables()? {
			match self.describe_table(&table) {
				Ok(def) => result.push(def),
				Err(err) if err.kind() == ErrorKind::NotFound => continue,
				Err(err) => return Err(err),
			}
		}
		Ok(result)
	}
}

#[cfg(test)]
mod tests {
	use palcraft_testing::fixture::{storage, storage_with};

	use super::*;

	#[test]
	fn test_list_excludes_internal_tables() {
		let catalog = Catalog::new(storage_with(
			"CREATE TABLE zebra (id INTEGER PRIMARY KEY AUTOINCREMENT);
			 CREATE TABLE apple (id INTEGER PRIMARY KEY);
			 CREATE VIEW v AS SELECT id FROM apple;
			 INSERT INTO zebra DEFAULT VALUES;",
		));
		assert_eq!(catalog.list_tables().unwrap(), vec!["apple", "zebra"]);
	}

	#[test]
	fn test_list_empty_database() {
		let catalog = Catalog::new(storage());
		assert!(catalog.list_tables().unwrap().is_empty());
		assert!(catalog.describe_schema().unwrap().is_empty());
	}

	#[test]
	fn test_table_exists() {
		let catalog = Catalog::new(storage_with("CREATE TABLE a (id INTEGER)"));
		assert!(catalog.table_exists("a").unwrap());
		assert!(catalog.table_exists("A").unwrap());
		assert!(!catalog.table_exists("b").unwrap());
		assert!(!catalog.table_exists("sqlite_master").unwrap());
	}

	#[test]
	fn test_describe_schema() {
		let catalog = Catalog::new(storage_with(
			"CREATE TABLE b (id INTEGER PRIMARY KEY, name TEXT);
			 CREATE TABLE a (x REAL);",
		));
		let schema = catalog.describe_schema().unwrap();
		assert_eq!(schema.len(), 2);
		assert_eq!(schema[0].name, "a");
		assert_eq!(schema[0].columns.len(), 1);
		assert_eq!(schema[1].name, "b");
		assert_eq!(schema[1].columns[1].name, "name");
	}
}
