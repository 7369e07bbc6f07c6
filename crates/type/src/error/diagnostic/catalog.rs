// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Diagnostic;

pub const TABLE_NOT_FOUND: &str = "CATALOG_001";
pub const TABLE_ALREADY_EXISTS: &str = "CATALOG_002";
pub const INVALID_IDENTIFIER: &str = "CATALOG_003";
pub const RECORD_NOT_FOUND: &str = "CATALOG_004";

pub fn table_not_found(table: &str) -> Diagnostic {
	Diagnostic {
		code: TABLE_NOT_FOUND.to_string(),
		message: format!("table '{}' does not exist", table),
		label: Some("unknown table".to_string()),
		help: Some("list the available tables through the schema endpoint and check for typos".to_string()),
		..Default::default()
	}
}

/// `native` is the storage engine's own message and is kept verbatim.
pub fn table_already_exists(table: &str, native: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: TABLE_ALREADY_EXISTS.to_string(),
		message: format!("table '{}' already exists", table),
		label: Some("duplicate table name".to_string()),
		help: Some("choose a different name or drop the existing table first".to_string()),
		notes: vec![native.into()],
		..Default::default()
	}
}

pub fn invalid_identifier(kind: &str, identifier: &str) -> Diagnostic {
	Diagnostic {
		code: INVALID_IDENTIFIER.to_string(),
		message: format!("invalid {} name '{}'", kind, identifier),
		label: Some("identifier contains characters outside the allowed set".to_string()),
		help: Some(
			"names must start with a letter or underscore and contain only letters, digits and underscores"
				.to_string(),
		),
		notes: vec!["identifiers are limited to 128 characters".to_string()],
		..Default::default()
	}
}

pub fn record_not_found(table: &str, id: i64) -> Diagnostic {
	Diagnostic {
		code: RECORD_NOT_FOUND.to_string(),
		message: format!("no record with id {} in table '{}'", id, table),
		label: Some("unknown record".to_string()),
		..Default::default()
	}
}
