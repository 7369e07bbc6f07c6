// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Failures reported by the storage engine. Native messages are kept as-is.

use crate::Diagnostic;

pub const EXECUTION_FAILED: &str = "STORE_001";
pub const DUPLICATE_ENTRY: &str = "STORE_002";
pub const OPEN_FAILED: &str = "STORE_003";

pub fn execution_failed(native: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: EXECUTION_FAILED.to_string(),
		message: native.into(),
		label: Some("statement failed".to_string()),
		..Default::default()
	}
}

pub fn duplicate_entry(native: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: DUPLICATE_ENTRY.to_string(),
		message: native.into(),
		label: Some("a row with the same unique value already exists".to_string()),
		..Default::default()
	}
}

pub fn open_failed(path: &str, native: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: OPEN_FAILED.to_string(),
		message: format!("failed to open database at '{}': {}", path, native.into()),
		help: Some("check that the directory exists and is writable".to_string()),
		..Default::default()
	}
}
