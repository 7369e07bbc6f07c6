// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_type::Value;
use rusqlite::types::{Value as SqlValue, ValueRef};

pub(crate) fn value_from_ref(value: ValueRef<'_>) -> Value {
	match value {
		ValueRef::Null => Value::Null,
		ValueRef::Integer(v) => Value::Integer(v),
		ValueRef::Real(v) => Value::Float(v),
		ValueRef::Text(text) => Value::Text(String::from_utf8_lossy(text).into_owned()),
		ValueRef::Blob(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
	}
}

pub(crate) fn convert_value(value: &Value) -> SqlValue {
	match value {
		Value::Null => SqlValue::Null,
		Value::Boolean(v) => SqlValue::Integer(*v as i64),
		Value::Integer(v) => SqlValue::Integer(*v),
		Value::Float(v) => SqlValue::Real(*v),
		Value::Text(v) => SqlValue::Text(v.clone()),
	}
}

pub(crate) fn convert_params(params: &[Value]) -> Vec<SqlValue> {
	params.iter().map(convert_value).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_blob_reads_as_text() {
		assert_eq!(value_from_ref(ValueRef::Blob(b"ore")), Value::text("ore"));
	}

	#[test]
	fn test_boolean_binds_as_integer() {
		assert_eq!(convert_value(&Value::Boolean(true)), SqlValue::Integer(1));
		assert_eq!(convert_value(&Value::Boolean(false)), SqlValue::Integer(0));
	}
}
