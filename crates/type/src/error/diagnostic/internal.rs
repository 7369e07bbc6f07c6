// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Diagnostic;

pub fn internal(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_001".to_string(),
		message: format!("internal error: {}", reason.into()),
		help: Some("this should not happen in normal operation, please file a bug report".to_string()),
		..Default::default()
	}
}
