// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Identifier checks for statement text built at runtime.
//!
//! Table and column names are the only caller-supplied text ever spliced into
//! generated SQL. Everything else travels as a bound parameter. Every name
//! must pass [`validate`] before it is interpolated, and is then emitted
//! double-quoted by [`quote`].

use palcraft_type::{Result, diagnostic::catalog::invalid_identifier, return_error};

pub const MAX_IDENTIFIER_LEN: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
	Table,
	Column,
}

impl IdentifierKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			IdentifierKind::Table => "table",
			IdentifierKind::Column => "column",
		}
	}
}

/// `[A-Za-z_][A-Za-z0-9_]*`, at most [`MAX_IDENTIFIER_LEN`] characters.
pub fn is_valid_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	let Some(first) = chars.next() else {
		return false;
	};

	name.len() <= MAX_IDENTIFIER_LEN
		&& (first.is_ascii_alphabetic() || first == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn validate(kind: IdentifierKind, name: &str) -> Result<()> {
	if !is_valid_identifier(name) {
		return_error!(invalid_identifier(kind.as_str(), name));
	}
	Ok(())
}

/// Validate `name` and return it ready for interpolation.
pub fn quote(kind: IdentifierKind, name: &str) -> Result<String> {
	validate(kind, name)?;
	Ok(format!("\"{}\"", name))
}

/// Declared column types such as `INTEGER`, `VARCHAR(255)` or `DECIMAL(10, 2)`.
pub fn is_valid_type(r#type: &str) -> bool {
	!r#type.trim().is_empty()
		&& r#type.len() <= MAX_IDENTIFIER_LEN
		&& r#type.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '(' | ')' | ','))
}
