// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use palcraft_catalog::Catalog;
use palcraft_sqlite::Sqlite;

/// Shared handle over the storage engine and its live catalog.
///
/// Cloning is cheap; every clone talks to the same connection.
#[derive(Clone)]
pub struct Engine(Arc<EngineInner>);

pub struct EngineInner {
	pub(crate) storage: Sqlite,
	pub(crate) catalog: Catalog,
}

impl Deref for Engine {
	type Target = EngineInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Engine {
	pub fn new(storage: Sqlite) -> Self {
		let catalog = Catalog::new(storage.clone());
		Self(Arc::new(EngineInner {
			storage,
			catalog,
		}))
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn storage(&self) -> &Sqlite {
		&self.storage
	}
}
