// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_type::{Result, diagnostic::subsystem::invalid_config, return_error};

use crate::subsystem::TracingSubsystem;

/// Output layout of formatted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
	Pretty,
	#[default]
	Compact,
	Json,
}

impl Format {
	pub fn as_str(&self) -> &'static str {
		match self {
			Format::Pretty => "pretty",
			Format::Compact => "compact",
			Format::Json => "json",
		}
	}

	pub fn parse(value: &str) -> Result<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"pretty" => Ok(Format::Pretty),
			"compact" => Ok(Format::Compact),
			"json" => Ok(Format::Json),
			_ => return_error!(invalid_config("log format", value, "one of pretty, compact, json")),
		}
	}
}

/// Builder for [`TracingSubsystem`].
///
/// `RUST_LOG`, when set, takes precedence over the configured filter.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	pub(crate) filter: String,
	pub(crate) format: Format,
	pub(crate) with_target: bool,
	pub(crate) ansi: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			filter: "info".to_string(),
			format: Format::default(),
			with_target: true,
			ansi: true,
		}
	}

	/// An `EnvFilter` directive such as `info` or `palcraft_engine=debug,info`.
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = filter.into();
		self
	}

	pub fn with_format(mut self, format: Format) -> Self {
		self.format = format;
		self
	}

	pub fn with_target(mut self, enabled: bool) -> Self {
		self.with_target = enabled;
		self
	}

	pub fn with_ansi(mut self, enabled: bool) -> Self {
		self.ansi = enabled;
		self
	}

	pub fn build(self) -> TracingSubsystem {
		TracingSubsystem::new(self)
	}
}
