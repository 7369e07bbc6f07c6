// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::ErrorKind;

pub mod catalog;
pub mod internal;
pub mod render;
pub mod store;
pub mod subsystem;
pub mod validation;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub statement: Option<String>,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Attach the statement text that produced this diagnostic.
	pub fn with_statement(&mut self, statement: impl Into<String>) {
		self.statement = Some(statement.into());
	}

	pub fn kind(&self) -> ErrorKind {
		match self.code.as_str() {
			catalog::TABLE_NOT_FOUND | catalog::RECORD_NOT_FOUND => ErrorKind::NotFound,
			catalog::TABLE_ALREADY_EXISTS | store::DUPLICATE_ENTRY => ErrorKind::Conflict,
			catalog::INVALID_IDENTIFIER | subsystem::INVALID_CONFIG => ErrorKind::Validation,
			code if code.starts_with(validation::PREFIX) => ErrorKind::Validation,
			store::EXECUTION_FAILED | store::OPEN_FAILED => ErrorKind::Execution,
			_ => ErrorKind::Internal,
		}
	}
}
