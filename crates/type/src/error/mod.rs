// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod r#macro;

use diagnostic::{Diagnostic, render::DefaultRenderer};

/// Coarse classification of a failure, used by callers that need to react
/// to a category rather than a specific code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// A table or record is absent.
	NotFound,
	/// The request was rejected before reaching the storage engine.
	Validation,
	/// A duplicate table or identifier, reported by the storage engine.
	Conflict,
	/// The storage engine failed to run a statement.
	Execution,
	/// Anything that should not happen in normal operation.
	Internal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn kind(&self) -> ErrorKind {
		self.0.kind()
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}
