// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Schema-agnostic reads and writes over arbitrary tables.
//!
//! Table and column names pass identifier validation before they reach
//! statement text; every value is bound as a parameter.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod coerce;
mod engine;
mod query;
mod row;

pub use coerce::{PreparedWrite, prepare_insert, prepare_update};
pub use engine::Engine;
