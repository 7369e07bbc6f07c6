// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! HTTP server subsystem.
//!
//! An axum server exposing the crafting calculator under `/api` and the
//! database administration surface under `/admin/api`. It runs on a tokio
//! runtime owned by the caller.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/recipes`, `GET /api/recipes/{id}`, `GET /api/categories`, `GET /api/resources`
//! - `POST /api/calculate` - Resource totals for a cart
//! - `GET /admin/api/schema`, `GET /admin/api/schema/{table}`
//! - `POST /admin/api/create-table`
//! - `GET|POST|DELETE /admin/api/table/{table}`, `PUT|DELETE /admin/api/table/{table}/{id}`
//! - `POST /admin/api/query`, `POST /admin/api/execute` - Raw statements
//!
//! # Example
//!
//! ```ignore
//! let runtime = tokio::runtime::Runtime::new()?;
//! let state = AppState::new(Engine::new(storage));
//!
//! let mut http = HttpSubsystem::new(HttpConfig::default(), state, runtime.handle().clone());
//! http.start()?;
//! // Server is now accepting connections
//!
//! http.shutdown()?;
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod subsystem;

pub use config::HttpConfig;
pub use error::{AppError, DiagnosticResponse, JsonBody};
pub use handlers::QueryResponse;
pub use routes::router;
pub use state::AppState;
pub use subsystem::HttpSubsystem;
