// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod frame;
mod record;

pub use frame::Frame;
pub use record::Record;

/// A single cell of an arbitrary table.
///
/// Serializes to, and deserializes from, a plain JSON scalar. The variant
/// order matters for deserialization: booleans are tried before numbers and
/// integers before floats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// Value is absent (SQL NULL)
	Null,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte signed integer
	Integer(i64),
	/// An 8-byte floating point
	Float(f64),
	/// A UTF-8 encoded text
	Text(String),
}

impl Value {
	pub fn boolean(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn integer(v: impl Into<i64>) -> Self {
		Value::Integer(v.into())
	}

	pub fn float(v: impl Into<f64>) -> Self {
		Value::Float(v.into())
	}

	pub fn text(v: impl Into<String>) -> Self {
		Value::Text(v.into())
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// True for the empty string only; whitespace is content.
	pub fn is_empty_text(&self) -> bool {
		matches!(self, Value::Text(s) if s.is_empty())
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::Integer(v) => Some(*v),
			Value::Boolean(v) => Some(*v as i64),
			Value::Text(s) => s.trim().parse().ok(),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Text(s) => Some(s.as_str()),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Boolean(v) => write!(f, "{}", v),
			Value::Integer(v) => write!(f, "{}", v),
			Value::Float(v) => write!(f, "{}", v),
			Value::Text(v) => f.write_str(v),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Integer(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Integer(v as i64)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Null)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deserialize_scalars() {
		let values: Vec<Value> = serde_json::from_str(r#"[null, true, 42, 1.5, "wood"]"#).unwrap();
		assert_eq!(
			values,
			vec![Value::Null, Value::Boolean(true), Value::Integer(42), Value::Float(1.5), Value::text("wood")]
		);
	}

	#[test]
	fn test_deserialize_rejects_nested() {
		assert!(serde_json::from_str::<Value>(r#"{"a": 1}"#).is_err());
		assert!(serde_json::from_str::<Value>(r#"[1, 2]"#).is_err());
	}

	#[test]
	fn test_serialize_plain() {
		let json = serde_json::to_string(&vec![Value::Null, Value::integer(7), Value::text("x")]).unwrap();
		assert_eq!(json, r#"[null,7,"x"]"#);
	}

	#[test]
	fn test_as_i64() {
		assert_eq!(Value::integer(3).as_i64(), Some(3));
		assert_eq!(Value::text(" 12 ").as_i64(), Some(12));
		assert_eq!(Value::text("twelve").as_i64(), None);
		assert_eq!(Value::Null.as_i64(), None);
	}

	#[test]
	fn test_empty_text() {
		assert!(Value::text("").is_empty_text());
		assert!(!Value::text(" ").is_empty_text());
		assert!(!Value::Null.is_empty_text());
	}
}
