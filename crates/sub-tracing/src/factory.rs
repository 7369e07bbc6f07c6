// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{builder::TracingBuilder, subsystem::TracingSubsystem};

/// Configuration function for the tracing subsystem
pub type TracingConfigurator = Box<dyn FnOnce(TracingBuilder) -> TracingBuilder + Send>;

/// Factory for creating TracingSubsystem instances
pub struct TracingSubsystemFactory {
	configurator: Option<TracingConfigurator>,
}

impl TracingSubsystemFactory {
	/// Create a new factory with default configuration
	pub fn new() -> Self {
		Self {
			configurator: None,
		}
	}

	/// Create a factory with a custom configurator
	pub fn with_configurator<F>(configurator: F) -> Self
	where
		F: FnOnce(TracingBuilder) -> TracingBuilder + Send + 'static,
	{
		Self {
			configurator: Some(Box::new(configurator)),
		}
	}

	pub fn create(self) -> TracingSubsystem {
		let builder = match self.configurator {
			Some(configurator) => configurator(TracingBuilder::new()),
			None => TracingBuilder::default(),
		};
		builder.build()
	}
}

impl Default for TracingSubsystemFactory {
	fn default() -> Self {
		Self::new()
	}
}
