use thiserror::Error;

use crate::bridge::{BridgeError, FloatWidth, IntWidth, Kind, Value};

/// Failed conversion of one source value to a declared kind.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot coerce {source_kind} {value} to {target_kind}")]
pub struct Mismatch {
	/// Source value as received.
	pub value: Value,
	/// Kind label of the source value.
	pub source_kind: &'static str,
	/// Kind label of the attempted target.
	pub target_kind: String,
}

impl Mismatch {
	/// Record a failed conversion of `value` into `target`.
	pub fn new(value: &Value, target: &Kind) -> Self {
		Self {
			value: value.clone(),
			source_kind: value.kind_name(),
			target_kind: target.to_string(),
		}
	}

	/// Attach the attribute name, producing the assignor's error.
	pub fn into_error(self, field: &str) -> BridgeError {
		BridgeError::Coercion {
			field: field.to_owned(),
			value: self.value,
			source_kind: self.source_kind,
			target_kind: self.target_kind,
		}
	}
}

/// Convert `value` into the canonical variant for `target`.
///
/// Integers come back as `I64`/`U64` already truncated to the declared
/// width, floats as `F32`/`F64`, compounds as `Array`/`Map` with canonical
/// elements. Every [`Field`](crate::bridge::Field) impl stores what this
/// returns, so it is the single conversion table behind `assign`.
///
/// A record kind takes a map and coerces each visible field present in it
/// by that field's rule; undeclared and hidden keys are dropped, as the
/// record's import ignores them. An opaque kind takes any map unchanged and
/// leaves checking it to the type's own import.
pub fn coerce(value: &Value, target: &Kind) -> Result<Value, Mismatch> {
	let mismatch = || Mismatch::new(value, target);

	match target {
		Kind::Int(width) => to_int(value).map(|v| Value::I64(wrap_signed(v, *width))).ok_or_else(mismatch),
		Kind::Uint(width) => to_uint(value).map(|v| Value::U64(wrap_unsigned(v, *width))).ok_or_else(mismatch),
		Kind::Float(FloatWidth::F32) => to_float(value).map(|v| Value::F32(v as f32)).ok_or_else(mismatch),
		Kind::Float(FloatWidth::F64) => to_float(value).map(Value::F64).ok_or_else(mismatch),
		Kind::String => Ok(Value::String(to_text(value).into_boxed_str())),
		Kind::Bool => to_bool(value).map(Value::Bool).ok_or_else(mismatch),
		Kind::Seq(elem) => match value {
			Value::Array(items) if is_assignable(value, target) => items
				.iter()
				.map(|item| coerce(item, elem))
				.collect::<Result<Vec<_>, _>>()
				.map(Value::Array),
			_ => Err(mismatch()),
		},
		Kind::Map(inner) => match value {
			Value::Map(map) if is_assignable(value, target) => map
				.iter()
				.map(|(key, item)| coerce(item, inner).map(|item| (key.clone(), item)))
				.collect::<Result<_, _>>()
				.map(Value::Map),
			_ => Err(mismatch()),
		},
		Kind::Ptr(inner) => match value {
			Value::Null => Ok(Value::Null),
			_ => coerce(value, inner),
		},
		Kind::Any => Ok(value.clone()),
		Kind::Record(desc) => match value {
			Value::Map(map) => desc
				.visible()
				.filter_map(|entry| map.get(entry.name).map(|item| (entry, item)))
				.map(|(entry, item)| coerce(item, &(entry.kind)()).map(|item| (entry.name.to_owned(), item)))
				.collect::<Result<_, _>>()
				.map(Value::Map),
			_ => Err(mismatch()),
		},
		Kind::Opaque(_) => match value {
			Value::Map(_) => Ok(value.clone()),
			_ => Err(mismatch()),
		},
	}
}

/// Integer rule: native integers wrap to 64 bits, finite floats truncate
/// toward zero (saturating at the `i64` bounds), strings use strict decimal
/// syntax.
pub fn to_int(value: &Value) -> Option<i64> {
	match value {
		Value::I64(v) => Some(*v),
		Value::U64(v) => Some(*v as i64),
		Value::F32(v) => float_to_int(f64::from(*v)),
		Value::F64(v) => float_to_int(*v),
		Value::String(text) => text.parse::<i64>().ok(),
		_ => None,
	}
}

/// Unsigned rule: like [`to_int`], but every negative representation fails.
pub fn to_uint(value: &Value) -> Option<u64> {
	match value {
		Value::U64(v) => Some(*v),
		Value::I64(v) => u64::try_from(*v).ok(),
		Value::F32(v) => float_to_uint(f64::from(*v)),
		Value::F64(v) => float_to_uint(*v),
		Value::String(text) => text.parse::<u64>().ok(),
		_ => None,
	}
}

/// Float rule: any number widens, strings parse as decimal floats.
pub fn to_float(value: &Value) -> Option<f64> {
	match value {
		Value::I64(v) => Some(*v as f64),
		Value::U64(v) => Some(*v as f64),
		Value::F32(v) => Some(f64::from(*v)),
		Value::F64(v) => Some(*v),
		Value::String(text) => text.parse::<f64>().ok(),
		_ => None,
	}
}

/// String rule. Never fails.
pub fn to_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.to_string(),
		Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
		Value::I64(v) => v.to_string(),
		Value::U64(v) => v.to_string(),
		Value::F32(v) => v.to_string(),
		Value::F64(v) => v.to_string(),
		Value::Bool(v) => v.to_string(),
		Value::Null | Value::Array(_) | Value::Map(_) => value.to_json().to_string(),
	}
}

/// Boolean rule: native booleans, boolean literals, and non-zero numbers.
pub fn to_bool(value: &Value) -> Option<bool> {
	match value {
		Value::Bool(v) => Some(*v),
		Value::String(text) => parse_bool(text),
		Value::I64(v) => Some(*v != 0),
		Value::U64(v) => Some(*v != 0),
		Value::F32(v) => Some(*v != 0.0),
		Value::F64(v) => Some(*v != 0.0),
		_ => None,
	}
}

/// Parse the accepted boolean literal set.
pub fn parse_bool(text: &str) -> Option<bool> {
	match text {
		"1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
		"0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
		_ => None,
	}
}

/// Whether `value` already has the exact shape of `kind`, with no
/// cross-representation conversion. Used for compound targets.
///
/// A map matches a record kind when every key names a visible field and
/// its value matches that field exactly.
pub fn is_assignable(value: &Value, kind: &Kind) -> bool {
	match (kind, value) {
		(Kind::Any, _) => true,
		(Kind::Int(width), Value::I64(v)) => fits_signed(*v, *width),
		(Kind::Int(width), Value::U64(v)) => i64::try_from(*v).is_ok_and(|v| fits_signed(v, *width)),
		(Kind::Uint(width), Value::U64(v)) => fits_unsigned(*v, *width),
		(Kind::Uint(width), Value::I64(v)) => u64::try_from(*v).is_ok_and(|v| fits_unsigned(v, *width)),
		(Kind::Float(_), Value::F32(_) | Value::F64(_)) => true,
		(Kind::String, Value::String(_)) => true,
		(Kind::Bool, Value::Bool(_)) => true,
		(Kind::Seq(elem), Value::Array(items)) => items.iter().all(|item| is_assignable(item, elem)),
		(Kind::Map(inner), Value::Map(map)) => map.values().all(|item| is_assignable(item, inner)),
		(Kind::Record(desc), Value::Map(map)) => map.iter().all(|(key, item)| {
			desc.entry(key)
				.is_some_and(|entry| entry.visible && is_assignable(item, &(entry.kind)()))
		}),
		(Kind::Ptr(_), Value::Null) => true,
		(Kind::Ptr(inner), _) => is_assignable(value, inner),
		_ => false,
	}
}

fn float_to_int(value: f64) -> Option<i64> {
	value.is_finite().then(|| value.trunc() as i64)
}

fn float_to_uint(value: f64) -> Option<u64> {
	(value.is_finite() && value >= 0.0).then(|| value.trunc() as u64)
}

fn wrap_signed(value: i64, width: IntWidth) -> i64 {
	match width {
		IntWidth::W8 => i64::from(value as i8),
		IntWidth::W16 => i64::from(value as i16),
		IntWidth::W32 => i64::from(value as i32),
		IntWidth::W64 => value,
		IntWidth::Size => value as isize as i64,
	}
}

fn wrap_unsigned(value: u64, width: IntWidth) -> u64 {
	match width {
		IntWidth::W8 => u64::from(value as u8),
		IntWidth::W16 => u64::from(value as u16),
		IntWidth::W32 => u64::from(value as u32),
		IntWidth::W64 => value,
		IntWidth::Size => value as usize as u64,
	}
}

fn fits_signed(value: i64, width: IntWidth) -> bool {
	let bits = width.bits();
	if bits >= 64 {
		return true;
	}
	let half = 1_i64 << (bits - 1);
	(-half..half).contains(&value)
}

fn fits_unsigned(value: u64, width: IntWidth) -> bool {
	let bits = width.bits();
	bits >= 64 || value < (1_u64 << bits)
}
