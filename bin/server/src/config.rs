// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Server settings read from `PALCRAFT_*` environment variables.

use palcraft_sqlite::SqliteConfig;
use palcraft_sub_server_http::HttpConfig;
use palcraft_sub_tracing::Format;
use palcraft_type::{Result, diagnostic::subsystem::invalid_config, return_error};

pub const DEFAULT_DB_PATH: &str = "./data/palworld.db";
pub const MEMORY_DB_PATH: &str = ":memory:";

#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub db_path: String,
	pub http: HttpConfig,
	pub log_filter: String,
	pub log_format: Format,
	pub seed: bool,
}

impl ServerConfig {
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let mut http = HttpConfig::default();
		if let Some(addr) = lookup("PALCRAFT_BIND") {
			http = http.bind_addr(addr);
		}

		let log_format = match lookup("PALCRAFT_LOG_FORMAT") {
			Some(value) => Format::parse(&value)?,
			None => Format::default(),
		};

		let seed = match lookup("PALCRAFT_SEED") {
			Some(value) => parse_bool("PALCRAFT_SEED", &value)?,
			None => true,
		};

		Ok(Self {
			db_path: lookup("PALCRAFT_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
			http,
			log_filter: lookup("PALCRAFT_LOG").unwrap_or_else(|| "info".to_string()),
			log_format,
			seed,
		})
	}

	pub fn sqlite(&self) -> SqliteConfig {
		if self.db_path == MEMORY_DB_PATH {
			SqliteConfig::in_memory()
		} else {
			SqliteConfig::new(&self.db_path)
		}
	}
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => return_error!(invalid_config(key, value, "true or false")),
	}
}
