// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_catalog::identifier::{IdentifierKind, quote};
use palcraft_type::{Frame, Record, Result, Value, diagnostic::catalog::record_not_found, return_error};
use tracing::{debug, instrument};

use crate::{
	Engine,
	coerce::{prepare_insert, prepare_update},
};

impl Engine {
	/// Every row of `table`, in whatever order the engine scans it.
	#[instrument(name = "engine::row::read_all", level = "debug", skip(self))]
	pub fn read_all(&self, table: &str) -> Result<Frame> {
		let def = self.catalog.describe_table(table)?;
		let table = quote(IdentifierKind::Table, &def.name)?;
		self.storage.query(&format!("SELECT * FROM {}", table), &[])
	}

	/// Insert `record` into `table` and return the new rowid.
	#[instrument(name = "engine::row::insert", level = "debug", skip(self, record), fields(columns = record.len()))]
	pub fn insert(&self, table: &str, record: Record) -> Result<i64> {
		let def = self.catalog.describe_table(table)?;
		let prepared = prepare_insert(&def, record)?;

		let table = quote(IdentifierKind::Table, &def.name)?;
		let columns = quote_columns(&prepared.columns)?;
		let placeholders = (1..=prepared.values.len()).map(|i| format!("?{}", i)).collect::<Vec<_>>();

		let sql = format!("INSERT INTO {} ({}) VALUES ({})", table, columns.join(", "), placeholders.join(", "));
		let id = self.storage.insert(&sql, &prepared.values)?;
		debug!(id, "row inserted");
		Ok(id)
	}

	/// Overwrite the columns in `record` on the row whose id is `id`.
	///
	/// The id column itself is never written. Fails with not found when no row
	/// carries `id`.
	#[instrument(name = "engine::row::update", level = "debug", skip(self, record), fields(columns = record.len()))]
	pub fn update_by_id(&self, table: &str, id: i64, record: Record) -> Result<()> {
		let def = self.catalog.describe_table(table)?;
		let id_column = def.id_column();
		let prepared = prepare_update(&def.name, record, id_column)?;

		let assignments = quote_columns(&prepared.columns)?
			.into_iter()
			.enumerate()
			.map(|(i, column)| format!("{} = ?{}", column, i + 1))
			.collect::<Vec<_>>();

		let sql = format!(
			"UPDATE {} SET {} WHERE {} = ?{}",
			quote(IdentifierKind::Table, &def.name)?,
			assignments.join(", "),
			quote(IdentifierKind::Column, id_column)?,
			prepared.values.len() + 1
		);

		let mut params = prepared.values;
		params.push(Value::integer(id));

		if self.storage.execute(&sql, &params)? == 0 {
			return_error!(record_not_found(&def.name, id));
		}
		Ok(())
	}

	/// Delete the row whose id is `id`, returning how many rows went away.
	///
	/// Deleting a row that does not exist removes nothing and succeeds.
	#[instrument(name = "engine::row::delete", level = "debug", skip(self))]
	pub fn delete_by_id(&self, table: &str, id: i64) -> Result<usize> {
		let def = self.catalog.describe_table(table)?;
		let sql = format!(
			"DELETE FROM {} WHERE {} = ?1",
			quote(IdentifierKind::Table, &def.name)?,
			quote(IdentifierKind::Column, def.id_column())?
		);
		self.storage.execute(&sql, &[Value::integer(id)])
	}
}

fn quote_columns(columns: &[String]) -> Result<Vec<String>> {
	columns.iter().map(|c| quote(IdentifierKind::Column, c)).collect()
}

#[cfg(test)]
mod tests {
	use palcraft_testing::fixture::{storage, widgets};
	use palcraft_type::{
		ErrorKind,
		diagnostic::{
			catalog::{INVALID_IDENTIFIER, RECORD_NOT_FOUND, TABLE_NOT_FOUND},
			store::{DUPLICATE_ENTRY, EXECUTION_FAILED},
			validation::{NOTHING_TO_INSERT, NOTHING_TO_UPDATE},
		},
	};

	use super::*;

	fn engine() -> Engine {
		Engine::new(widgets())
	}

	#[test]
	fn test_read_all_missing_table() {
		let err = engine().read_all("gadgets").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::NotFound);
		assert_eq!(err.diagnostic().code, TABLE_NOT_FOUND);
	}

	#[test]
	fn test_read_all_empty_table_keeps_columns() {
		let frame = engine().read_all("widgets").unwrap();
		assert!(frame.is_empty());
		assert_eq!(frame.columns, vec!["id", "label", "weight", "active"]);
	}

	#[test]
	fn test_insert_assigns_id() {
		let engine = engine();
		let first = engine.insert("widgets", Record::new().with("id", "").with("label", "gear")).unwrap();
		let second = engine.insert("widgets", Record::new().with("id", 0).with("label", "cog")).unwrap();
		assert_eq!((first, second), (1, 2));

		let frame = engine.read_all("widgets").unwrap();
		assert_eq!(frame.len(), 2);
		assert_eq!(frame.value(1, "label"), Some(&Value::text("cog")));
		assert_eq!(frame.value(1, "active"), Some(&Value::integer(1)));
	}

	#[test]
	fn test_insert_explicit_id() {
		let engine = engine();
		let id = engine.insert("widgets", Record::new().with("id", 40).with("label", "gear")).unwrap();
		assert_eq!(id, 40);

		let err = engine.insert("widgets", Record::new().with("id", 40).with("label", "dup")).unwrap_err();
		assert_eq!(err.diagnostic().code, DUPLICATE_ENTRY);
	}

	#[test]
	fn test_insert_empty_string_binds_null() {
		let err = engine().insert("widgets", Record::new().with("id", "").with("label", "")).unwrap_err();
		assert_eq!(err.clone().diagnostic().code, EXECUTION_FAILED);
		assert!(err.message.contains("NOT NULL constraint failed"));
	}

	#[test]
	fn test_insert_nothing_to_insert() {
		let err = engine().insert("widgets", Record::new().with("id", "")).unwrap_err();
		assert_eq!(err.diagnostic().code, NOTHING_TO_INSERT);
	}

	#[test]
	fn test_insert_missing_table() {
		let err = engine().insert("gadgets", Record::new().with("label", "x")).unwrap_err();
		assert_eq!(err.diagnostic().code, TABLE_NOT_FOUND);
	}

	#[test]
	fn test_insert_rejects_hostile_column_name() {
		let err = engine()
			.insert("widgets", Record::new().with("label\" ) ; DROP TABLE widgets; --", "x"))
			.unwrap_err();
		assert_eq!(err.diagnostic().code, INVALID_IDENTIFIER);
	}

	#[test]
	fn test_insert_unknown_column_is_reported_by_engine() {
		let err = engine().insert("widgets", Record::new().with("colour", "red")).unwrap_err();
		assert_eq!(err.clone().diagnostic().code, EXECUTION_FAILED);
		assert!(err.message.contains("colour"));
	}

	#[test]
	fn test_update_by_id() {
		let engine = engine();
		let id = engine.insert("widgets", Record::new().with("label", "gear").with("weight", 1.0)).unwrap();

		engine.update_by_id("widgets", id, Record::new().with("id", 99).with("label", "cog").with("weight", "")).unwrap();

		let frame = engine.read_all("widgets").unwrap();
		assert_eq!(frame.value(0, "id"), Some(&Value::integer(id)));
		assert_eq!(frame.value(0, "label"), Some(&Value::text("cog")));
		assert_eq!(frame.value(0, "weight"), Some(&Value::Null));
	}

	#[test]
	fn test_update_missing_row() {
		let err = engine().update_by_id("widgets", 5, Record::new().with("label", "x")).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::NotFound);
		assert_eq!(err.diagnostic().code, RECORD_NOT_FOUND);
	}

	#[test]
	fn test_update_only_id() {
		let engine = engine();
		let id = engine.insert("widgets", Record::new().with("label", "gear")).unwrap();
		let err = engine.update_by_id("widgets", id, Record::new().with("id", 3)).unwrap_err();
		assert_eq!(err.diagnostic().code, NOTHING_TO_UPDATE);
	}

	#[test]
	fn test_update_uses_declared_primary_key() {
		let engine = Engine::new(storage());
		engine.storage().execute_batch("CREATE TABLE pals (pal_no INTEGER PRIMARY KEY, name TEXT)").unwrap();
		engine.insert("pals", Record::new().with("pal_no", 12).with("name", "Lamball")).unwrap();

		engine.update_by_id("pals", 12, Record::new().with("pal_no", 13).with("name", "Cattiva")).unwrap();

		let frame = engine.read_all("pals").unwrap();
		assert_eq!(frame.value(0, "pal_no"), Some(&Value::integer(12)));
		assert_eq!(frame.value(0, "name"), Some(&Value::text("Cattiva")));
	}

	#[test]
	fn test_delete_by_id_is_idempotent() {
		let engine = engine();
		let id = engine.insert("widgets", Record::new().with("label", "gear")).unwrap();

		assert_eq!(engine.delete_by_id("widgets", id).unwrap(), 1);
		assert_eq!(engine.delete_by_id("widgets", id).unwrap(), 0);
		assert_eq!(engine.delete_by_id("widgets", 1234).unwrap(), 0);
		assert!(engine.read_all("widgets").unwrap().is_empty());
	}

	#[test]
	fn test_delete_missing_table() {
		let err = engine().delete_by_id("gadgets", 1).unwrap_err();
		assert_eq!(err.diagnostic().code, TABLE_NOT_FOUND);
	}
}
