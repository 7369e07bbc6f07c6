// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Value;

/// One row of an arbitrary table, keyed by column name.
///
/// Field order is the insertion order; it only matters for display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Value>);

impl Record {
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(column, value);
		self
	}

	pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(column.into(), value.into())
	}

	pub fn get(&self, column: &str) -> Option<&Value> {
		self.0.get(column)
	}

	pub fn remove(&mut self, column: &str) -> Option<Value> {
		self.0.shift_remove(column)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn columns(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl IntoIterator for Record {
	type Item = (String, Value);
	type IntoIter = indexmap::map::IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl FromIterator<(String, Value)> for Record {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
