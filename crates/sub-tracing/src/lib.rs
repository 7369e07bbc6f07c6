// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Process-wide `tracing` subscriber setup.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod builder;
mod factory;
mod subsystem;

pub use builder::{Format, TracingBuilder};
pub use factory::{TracingConfigurator, TracingSubsystemFactory};
pub use subsystem::TracingSubsystem;
