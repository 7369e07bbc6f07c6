// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::atomic::{AtomicBool, Ordering};

use palcraft_type::{Result, diagnostic::subsystem::tracing_init_failed, error};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::builder::{Format, TracingBuilder};

/// Installs the global subscriber once, on [`start`](Self::start).
pub struct TracingSubsystem {
	config: TracingBuilder,
	running: AtomicBool,
}

impl TracingSubsystem {
	pub(crate) fn new(config: TracingBuilder) -> Self {
		Self {
			config,
			running: AtomicBool::new(false),
		}
	}

	pub fn format(&self) -> Format {
		self.config.format
	}

	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::SeqCst)
	}

	/// `RUST_LOG` if set and valid, else the configured directive, else `info`.
	pub fn env_filter(&self) -> EnvFilter {
		EnvFilter::try_from_default_env()
			.or_else(|_| EnvFilter::try_new(&self.config.filter))
			.unwrap_or_else(|_| EnvFilter::new("info"))
	}

	pub fn start(&self) -> Result<()> {
		if self.running.swap(true, Ordering::SeqCst) {
			return Ok(());
		}

		let builder = tracing_subscriber::fmt()
			.with_env_filter(self.env_filter())
			.with_target(self.config.with_target)
			.with_ansi(self.config.ansi);

		let installed = match self.config.format {
			Format::Pretty => builder.pretty().try_init(),
			Format::Compact => builder.compact().try_init(),
			Format::Json => builder.json().try_init(),
		};

		if let Err(err) = installed {
			self.running.store(false, Ordering::SeqCst);
			return Err(error!(tracing_init_failed(err)));
		}

		debug!(format = self.config.format.as_str(), filter = %self.config.filter, "tracing started");
		Ok(())
	}
}
