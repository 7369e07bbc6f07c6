// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Rejections raised before any statement reaches the storage engine.

use crate::Diagnostic;

pub const PREFIX: &str = "VALIDATION_";

pub const EMPTY_TABLE_NAME: &str = "VALIDATION_001";
pub const NO_COLUMNS_DEFINED: &str = "VALIDATION_002";
pub const COLUMN_MISSING_NAME: &str = "VALIDATION_003";
pub const COLUMN_MISSING_TYPE: &str = "VALIDATION_004";
pub const INVALID_COLUMN_TYPE: &str = "VALIDATION_005";
pub const NOTHING_TO_INSERT: &str = "VALIDATION_006";
pub const NOTHING_TO_UPDATE: &str = "VALIDATION_007";
pub const EMPTY_STATEMENT: &str = "VALIDATION_008";
pub const EMPTY_NAME: &str = "VALIDATION_009";
pub const INVALID_QUANTITY: &str = "VALIDATION_010";
pub const INVALID_BODY: &str = "VALIDATION_011";

pub fn empty_table_name() -> Diagnostic {
	Diagnostic {
		code: EMPTY_TABLE_NAME.to_string(),
		message: "table name is required".to_string(),
		..Default::default()
	}
}

pub fn no_columns_defined(table: &str) -> Diagnostic {
	Diagnostic {
		code: NO_COLUMNS_DEFINED.to_string(),
		message: format!("table '{}' needs at least one column", table),
		..Default::default()
	}
}

pub fn column_missing_name(table: &str, position: usize) -> Diagnostic {
	Diagnostic {
		code: COLUMN_MISSING_NAME.to_string(),
		message: format!("column #{} of table '{}' has no name", position + 1, table),
		..Default::default()
	}
}

pub fn column_missing_type(table: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: COLUMN_MISSING_TYPE.to_string(),
		message: format!("column '{}' of table '{}' has no type", column, table),
		help: Some("use a storage type such as INTEGER, TEXT, REAL or BLOB".to_string()),
		..Default::default()
	}
}

pub fn invalid_column_type(column: &str, r#type: &str) -> Diagnostic {
	Diagnostic {
		code: INVALID_COLUMN_TYPE.to_string(),
		message: format!("invalid type '{}' for column '{}'", r#type, column),
		help: Some("types may only contain letters, digits, underscores, spaces, parentheses and commas".to_string()),
		..Default::default()
	}
}

pub fn nothing_to_insert(table: &str) -> Diagnostic {
	Diagnostic {
		code: NOTHING_TO_INSERT.to_string(),
		message: format!("no valid columns to insert into '{}'", table),
		notes: vec!["auto-increment primary keys that are empty or zero are assigned by the database".to_string()],
		..Default::default()
	}
}

pub fn nothing_to_update(table: &str) -> Diagnostic {
	Diagnostic {
		code: NOTHING_TO_UPDATE.to_string(),
		message: format!("no columns to update in '{}'", table),
		notes: vec!["the identifier column is never updated".to_string()],
		..Default::default()
	}
}

pub fn empty_statement() -> Diagnostic {
	Diagnostic {
		code: EMPTY_STATEMENT.to_string(),
		message: "query is required".to_string(),
		..Default::default()
	}
}

pub fn empty_name(what: &str) -> Diagnostic {
	Diagnostic {
		code: EMPTY_NAME.to_string(),
		message: format!("{} name is required", what),
		..Default::default()
	}
}

pub fn invalid_quantity(quantity: i64) -> Diagnostic {
	Diagnostic {
		code: INVALID_QUANTITY.to_string(),
		message: format!("quantity must be positive, got {}", quantity),
		label: Some("non-positive quantity".to_string()),
		..Default::default()
	}
}

pub fn invalid_body(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: INVALID_BODY.to_string(),
		message: reason.into(),
		help: Some("send a JSON object whose values are null, booleans, numbers or strings".to_string()),
		..Default::default()
	}
}
