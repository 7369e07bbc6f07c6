// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Configuration for the HTTP server subsystem.
#[derive(Debug, Clone)]
pub struct HttpConfig {
	/// Address and port to bind to.
	pub bind_addr: String,
	/// Largest accepted request body in bytes.
	pub max_body_size: usize,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			bind_addr: DEFAULT_BIND_ADDR.to_string(),
			max_body_size: DEFAULT_MAX_BODY_SIZE,
		}
	}
}

impl HttpConfig {
	pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
		self.bind_addr = addr.into();
		self
	}

	pub fn max_body_size(mut self, size: usize) -> Self {
		self.max_body_size = size;
		self
	}
}
