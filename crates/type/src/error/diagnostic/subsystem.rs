// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use crate::Diagnostic;

pub const BIND_FAILED: &str = "SUBSYSTEM_001";
pub const ADDRESS_UNAVAILABLE: &str = "SUBSYSTEM_002";
pub const TRACING_INIT_FAILED: &str = "SUBSYSTEM_003";
pub const INVALID_CONFIG: &str = "SUBSYSTEM_004";

pub fn bind_failed(addr: &str, err: impl Display) -> Diagnostic {
	Diagnostic {
		code: BIND_FAILED.to_string(),
		message: format!("failed to bind to {}: {}", addr, err),
		help: Some("check that the address is valid and the port is not already in use".to_string()),
		..Default::default()
	}
}

pub fn address_unavailable(err: impl Display) -> Diagnostic {
	Diagnostic {
		code: ADDRESS_UNAVAILABLE.to_string(),
		message: format!("failed to read local address: {}", err),
		..Default::default()
	}
}

pub fn tracing_init_failed(err: impl Display) -> Diagnostic {
	Diagnostic {
		code: TRACING_INIT_FAILED.to_string(),
		message: format!("failed to install tracing subscriber: {}", err),
		notes: vec!["a global subscriber can only be installed once per process".to_string()],
		..Default::default()
	}
}

pub fn invalid_config(key: &str, value: &str, expected: &str) -> Diagnostic {
	Diagnostic {
		code: INVALID_CONFIG.to_string(),
		message: format!("invalid value '{}' for {}", value, key),
		help: Some(format!("expected {}", expected)),
		..Default::default()
	}
}
