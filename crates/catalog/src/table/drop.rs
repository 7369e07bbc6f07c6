// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_type::Result;
use tracing::instrument;

use crate::{
	Catalog,
	identifier::{IdentifierKind, quote},
};

impl Catalog {
	/// Drop `table` if present. Dropping a missing table is not an error.
	#[instrument(name = "catalog::table::drop", level = "info", skip(self))]
	pub fn drop_table(&self, table: &str) -> Result<()> {
		let quoted = quote(IdentifierKind::Table, table)?;
		self.storage.execute_batch(&format!("DROP TABLE IF EXISTS {}", quoted))
	}
}
