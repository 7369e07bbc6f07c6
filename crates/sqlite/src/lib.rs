// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite storage handle.
//!
//! A single connection guarded by a mutex, shared by cloning the handle.
//! Statements run synchronously on the calling thread; concurrent callers are
//! serialized on the connection and no other locking is imposed.

mod config;
mod connection;
mod error;
mod value;

use std::sync::Arc;

pub use config::{DbPath, JournalMode, OpenFlags, SqliteConfig, SynchronousMode};
use palcraft_type::{Frame, Result, Value};
use parking_lot::Mutex;
use rusqlite::{Connection, params_from_iter};
use tracing::{debug, instrument};

use crate::{
	error::map_error,
	value::{convert_params, value_from_ref},
};

#[derive(Clone)]
pub struct Sqlite(Arc<SqliteInner>);

struct SqliteInner {
	conn: Mutex<Connection>,
	path: DbPath,
}

impl Sqlite {
	/// Open the database described by `config`.
	#[instrument(name = "store::sqlite::new", level = "info", skip(config), fields(
		db_path = %config.path.display(),
		journal_mode = %config.journal_mode.as_str(),
		foreign_keys = config.foreign_keys
	))]
	pub fn new(config: SqliteConfig) -> Result<Self> {
		let conn = connection::connect(&config)?;
		Ok(Self(Arc::new(SqliteInner {
			conn: Mutex::new(conn),
			path: config.path,
		})))
	}

	/// Create an in-memory database, mostly for tests.
	pub fn in_memory() -> Result<Self> {
		Self::new(SqliteConfig::in_memory())
	}

	pub fn path(&self) -> &DbPath {
		&self.0.path
	}

	/// Run a statement and collect every row it returns.
	#[instrument(name = "store::sqlite::query", level = "debug", skip(self, params), fields(param_count = params.len()))]
	pub fn query(&self, sql: &str, params: &[Value]) -> Result<Frame> {
		let conn = self.0.conn.lock();
		let mut stmt = conn.prepare(sql).map_err(|e| map_error(e, sql))?;

		let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
		let width = columns.len();
		let mut frame = Frame::new(columns);

		let params = convert_params(params);
		let mut rows = stmt.query(params_from_iter(params.iter())).map_err(|e| map_error(e, sql))?;

		while let Some(row) = rows.next().map_err(|e| map_error(e, sql))? {
			let mut values = Vec::with_capacity(width);
			for idx in 0..width {
				let cell = row.get_ref(idx).map_err(|e| map_error(e, sql))?;
				values.push(value_from_ref(cell));
			}
			frame.push(values);
		}

		debug!(rows = frame.len(), "query finished");
		Ok(frame)
	}

	/// Run a mutating statement and report the number of rows it changed.
	#[instrument(name = "store::sqlite::execute", level = "debug", skip(self, params), fields(param_count = params.len()), ret)]
	pub fn execute(&self, sql: &str, params: &[Value]) -> Result<usize> {
		let params = convert_params(params);
		let conn = self.0.conn.lock();
		conn.execute(sql, params_from_iter(params.iter())).map_err(|e| map_error(e, sql))
	}

	/// Run an INSERT and return the rowid it produced.
	///
	/// The rowid is read while the connection is still held, so a concurrent
	/// insert cannot interleave.
	#[instrument(name = "store::sqlite::insert", level = "debug", skip(self, params), fields(param_count = params.len()), ret)]
	pub fn insert(&self, sql: &str, params: &[Value]) -> Result<i64> {
		let params = convert_params(params);
		let conn = self.0.conn.lock();
		conn.execute(sql, params_from_iter(params.iter())).map_err(|e| map_error(e, sql))?;
		Ok(conn.last_insert_rowid())
	}

	/// Run one or more parameterless statements.
	#[instrument(name = "store::sqlite::execute_batch", level = "debug", skip_all)]
	pub fn execute_batch(&self, sql: &str) -> Result<()> {
		let conn = self.0.conn.lock();
		conn.execute_batch(sql).map_err(|e| map_error(e, sql))
	}
}
