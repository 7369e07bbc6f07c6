// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_type::{
	Result, Value,
	diagnostic::{catalog::table_not_found, internal::internal},
	return_error,
};
use tracing::instrument;

use crate::{
	Catalog,
	table::{ColumnDef, TableDef},
};

// Joined against sqlite_master so views and internal tables never resolve.
// Names match case-insensitively, as the engine resolves them.
const DESCRIBE_TABLE: &str = "SELECT m.name, p.name, p.type, p.\"notnull\", p.dflt_value, p.pk \
	FROM sqlite_master AS m JOIN pragma_table_info(m.name) AS p \
	WHERE m.type = 'table' AND m.name NOT LIKE 'sqlite_%' AND m.name = ?1 COLLATE NOCASE \
	ORDER BY p.cid";

impl Catalog {
	/// Columns of `table` in the engine's ordinal order, read fresh each call.
	#[instrument(name = "catalog::table::describe", level = "debug", skip(self))]
	pub fn describe_table(&self, table: &str) -> Result<TableDef> {
		let frame = self.storage.query(DESCRIBE_TABLE, &[Value::text(table)])?;
		if frame.is_empty() {
			return_error!(table_not_found(table));
		}

		// The catalog's spelling, not the caller's.
		let name = match frame.scalar() {
			Some(Value::Text(name)) => name.clone(),
			_ => return_error!(internal("table_info returned a table without a name")),
		};
		let columns = frame.rows.iter().map(|row| column_from_row(row.get(1..).unwrap_or_default())).collect::<Result<Vec<_>>>()?;

		Ok(TableDef {
			name,
			columns,
		})
	}
}

fn column_from_row(row: &[Value]) -> Result<ColumnDef> {
	let [name, data_type, not_null, default_value, pk] = row else {
		return_error!(internal(format!("table_info returned {} columns", row.len())));
	};

	let Some(name) = name.as_str() else {
		return_error!(internal("table_info returned a column without a name"));
	};

	Ok(ColumnDef {
		name: name.to_string(),
		data_type: data_type.as_str().unwrap_or_default().to_string(),
		not_null: not_null.as_i64().unwrap_or(0) != 0,
		default_value: match default_value {
			Value::Null => String::new(),
			other => other.to_string(),
		},
		primary_key: pk.as_i64().unwrap_or(0) > 0,
	})
}

#[cfg(test)]
mod tests {
	use palcraft_testing::fixture::{storage_with, widgets};
	use palcraft_type::{ErrorKind, diagnostic::catalog::TABLE_NOT_FOUND};

	use super::*;

	#[test]
	fn test_describe_keeps_ordinal_order() {
		let catalog = Catalog::new(widgets());
		let table = catalog.describe_table("widgets").unwrap();

		let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
		assert_eq!(names, vec!["id", "label", "weight", "active"]);

		let id = &table.columns[0];
		assert_eq!(id.data_type, "INTEGER");
		assert!(id.primary_key);

		let label = &table.columns[1];
		assert!(label.not_null);
		assert!(!label.primary_key);

		let active = &table.columns[3];
		assert_eq!(active.default_literal(), Some("1"));
		assert_eq!(table.columns[2].default_literal(), None);
	}

	#[test]
	fn test_describe_missing_table() {
		let catalog = Catalog::new(widgets());
		let err = catalog.describe_table("gadgets").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::NotFound);
		assert_eq!(err.diagnostic().code, TABLE_NOT_FOUND);
	}

	#[test]
	fn test_describe_ignores_views_and_internal_tables() {
		let catalog = Catalog::new(storage_with(
			"CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT, v TEXT);
			 CREATE VIEW t_view AS SELECT v FROM t;
			 INSERT INTO t (v) VALUES ('x');",
		));
		assert_eq!(catalog.describe_table("t_view").unwrap_err().diagnostic().code, TABLE_NOT_FOUND);
		assert_eq!(catalog.describe_table("sqlite_sequence").unwrap_err().diagnostic().code, TABLE_NOT_FOUND);
	}

	#[test]
	fn test_describe_ignores_name_case() {
		let catalog = Catalog::new(widgets());
		let table = catalog.describe_table("WIDGETS").unwrap();
		assert_eq!(table.name, "widgets");
		assert_eq!(table.columns.len(), 4);
	}

	#[test]
	fn test_describe_reflects_concurrent_ddl() {
		let storage = widgets();
		let catalog = Catalog::new(storage.clone());
		assert_eq!(catalog.describe_table("widgets").unwrap().columns.len(), 4);

		storage.execute_batch("ALTER TABLE widgets ADD COLUMN colour TEXT").unwrap();
		let table = catalog.describe_table("widgets").unwrap();
		assert_eq!(table.columns.len(), 5);
		assert_eq!(table.columns[4].name, "colour");
	}

	#[test]
	fn test_untyped_column() {
		let catalog = Catalog::new(storage_with("CREATE TABLE loose (a, b TEXT DEFAULT 'x')"));
		let table = catalog.describe_table("loose").unwrap();
		assert_eq!(table.columns[0].data_type, "");
		assert_eq!(table.columns[1].default_literal(), Some("'x'"));
	}
}
