// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Shared value and error types for palcraft.
//!
//! Everything that crosses a crate boundary lives here: the closed [`Value`]
//! variant used for cells of arbitrary tables, the ordered [`Record`] and
//! tabular [`Frame`] built from it, and the diagnostic based [`Error`].

pub mod error;
pub mod value;

pub use error::{
	Error, ErrorKind,
	diagnostic::{self, Diagnostic},
};
pub use value::{Frame, Record, Value};

pub type Result<T> = std::result::Result<T, Error>;
