// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{Record, Value};

/// Tabular result of a read: ordered column names and rows of cells.
///
/// Every row holds exactly one value per column, in column order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
	pub columns: Vec<String>,
	pub rows: Vec<Vec<Value>>,
}

impl Frame {
	pub fn new(columns: Vec<String>) -> Self {
		Self {
			columns,
			rows: Vec::new(),
		}
	}

	pub fn push(&mut self, row: Vec<Value>) {
		debug_assert_eq!(row.len(), self.columns.len());
		self.rows.push(row);
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|c| c == name)
	}

	pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
		let idx = self.column_index(column)?;
		self.rows.get(row).and_then(|r| r.get(idx))
	}

	/// First cell of the first row, if any.
	pub fn scalar(&self) -> Option<&Value> {
		self.rows.first().and_then(|r| r.first())
	}

	pub fn records(&self) -> Vec<Record> {
		self.rows
			.iter()
			.map(|row| self.columns.iter().cloned().zip(row.iter().cloned()).collect())
			.collect()
	}
}
