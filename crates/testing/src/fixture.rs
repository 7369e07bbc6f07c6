// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Ready-made in-memory databases.

use palcraft_sqlite::Sqlite;

pub const WIDGETS_DDL: &str = "CREATE TABLE widgets (
	id INTEGER PRIMARY KEY AUTOINCREMENT,
	label TEXT NOT NULL,
	weight REAL,
	active INTEGER NOT NULL DEFAULT 1
)";

/// An empty in-memory database.
pub fn storage() -> Sqlite {
	Sqlite::in_memory().expect("in-memory database")
}

/// An in-memory database after running `sql`.
pub fn storage_with(sql: &str) -> Sqlite {
	let storage = storage();
	storage.execute_batch(sql).expect("fixture statements");
	storage
}

/// An in-memory database holding an empty `widgets` table with an
/// auto-increment primary key.
pub fn widgets() -> Sqlite {
	storage_with(WIDGETS_DDL)
}
