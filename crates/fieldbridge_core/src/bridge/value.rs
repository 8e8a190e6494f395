use std::collections::BTreeMap;
use std::fmt;

use crate::bridge::{BridgeError, Result};

/// Attribute map keyed by field name.
pub type ValueMap = BTreeMap<String, Value>;

/// Loosely-typed source value, as produced by parsing JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// Missing or explicit null.
	#[default]
	Null,
	/// Boolean.
	Bool(bool),
	/// Signed integer.
	I64(i64),
	/// Unsigned integer above `i64::MAX`, or an exported unsigned field.
	U64(u64),
	/// Single-precision float.
	F32(f32),
	/// Double-precision float.
	F64(f64),
	/// Raw bytes.
	Bytes(Vec<u8>),
	/// UTF-8 text.
	String(Box<str>),
	/// Ordered list.
	Array(Vec<Value>),
	/// Nested attribute map.
	Map(ValueMap),
}

impl Value {
	/// Short label of this value's representation.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::I64(_) => "i64",
			Self::U64(_) => "u64",
			Self::F32(_) => "f32",
			Self::F64(_) => "f64",
			Self::Bytes(_) => "bytes",
			Self::String(_) => "string",
			Self::Array(_) => "array",
			Self::Map(_) => "map",
		}
	}

	/// Borrow the inner map when this is a `Map`.
	pub fn as_map(&self) -> Option<&ValueMap> {
		match self {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}

	/// Borrow the inner text when this is a `String`.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			_ => None,
		}
	}

	/// Convert into a `serde_json` value.
	///
	/// Non-finite floats become `null`; bytes become an array of numbers.
	pub fn to_json(&self) -> serde_json::Value {
		use serde_json::Value as Json;

		match self {
			Self::Null => Json::Null,
			Self::Bool(v) => Json::Bool(*v),
			Self::I64(v) => Json::from(*v),
			Self::U64(v) => Json::from(*v),
			// Reparse the shortest f32 text so 29.97f32 stays 29.97.
			Self::F32(v) => v.to_string().parse::<f64>().map(float_json).unwrap_or(Json::Null),
			Self::F64(v) => float_json(*v),
			Self::Bytes(bytes) => Json::Array(bytes.iter().map(|byte| Json::from(*byte)).collect()),
			Self::String(text) => Json::String(text.to_string()),
			Self::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
			Self::Map(map) => Json::Object(map.iter().map(|(key, value)| (key.clone(), value.to_json())).collect()),
		}
	}
}

fn float_json(value: f64) -> serde_json::Value {
	serde_json::Number::from_f64(value)
		.map(serde_json::Value::Number)
		.unwrap_or(serde_json::Value::Null)
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("null"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::I64(v) => write!(f, "{v}"),
			Self::U64(v) => write!(f, "{v}"),
			Self::F32(v) => write!(f, "{v}"),
			Self::F64(v) => write!(f, "{v}"),
			Self::Bytes(v) => write!(f, "bytes[{}]", v.len()),
			Self::String(v) => write!(f, "{:?}", v),
			Self::Array(_) | Self::Map(_) => write!(f, "{}", self.to_json()),
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(json: serde_json::Value) -> Self {
		use serde_json::Value as Json;

		match json {
			Json::Null => Self::Null,
			Json::Bool(v) => Self::Bool(v),
			Json::Number(number) => {
				if let Some(v) = number.as_i64() {
					Self::I64(v)
				} else if let Some(v) = number.as_u64() {
					Self::U64(v)
				} else {
					Self::F64(number.as_f64().unwrap_or(f64::NAN))
				}
			}
			Json::String(text) => Self::String(text.into_boxed_str()),
			Json::Array(items) => Self::Array(items.into_iter().map(Value::from).collect()),
			Json::Object(object) => Self::Map(object.into_iter().map(|(key, value)| (key, Value::from(value))).collect()),
		}
	}
}

/// Convert a parsed JSON document into an attribute map.
///
/// `what` names the input in the error when the document is not an object.
pub fn map_from_json(json: serde_json::Value, what: &str) -> Result<ValueMap> {
	match Value::from(json) {
		Value::Map(map) => Ok(map),
		_ => Err(BridgeError::NotAnObject { what: what.to_owned() }),
	}
}

/// Render an attribute map as a JSON object.
pub fn map_to_json(map: &ValueMap) -> serde_json::Value {
	serde_json::Value::Object(map.iter().map(|(key, value)| (key.clone(), value.to_json())).collect())
}

macro_rules! value_from {
	($($ty:ty => $variant:ident via $conv:expr),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Self::$variant($conv(v))
				}
			}
		)*
	};
}

value_from! {
	bool => Bool via std::convert::identity,
	i32 => I64 via i64::from,
	i64 => I64 via std::convert::identity,
	u32 => U64 via u64::from,
	u64 => U64 via std::convert::identity,
	f32 => F32 via std::convert::identity,
	f64 => F64 via std::convert::identity,
	String => String via String::into_boxed_str,
	Vec<Value> => Array via std::convert::identity,
	ValueMap => Map via std::convert::identity,
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::String(v.into())
	}
}
