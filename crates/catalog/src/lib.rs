// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Live schema access.
//!
//! The catalog never caches: every call re-reads the storage engine's own
//! catalog, so descriptors reflect concurrent DDL immediately.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod identifier;
pub mod table;

use palcraft_sqlite::Sqlite;
pub use table::{ColumnDef, TableDef, TableToCreate};

#[derive(Clone)]
pub struct Catalog {
	storage: Sqlite,
}

impl Catalog {
	pub fn new(storage: Sqlite) -> Self {
		Self {
			storage,
		}
	}

	pub fn storage(&self) -> &Sqlite {
		&self.storage
	}
}
