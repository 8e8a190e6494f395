use crate::bridge::{BridgeError, Field, FloatWidth, Kind, RecordDesc, Result, Value, ValueMap};

/// Build the zero-equivalent value for every visible field of a record kind.
pub fn defaults(kind: &Kind) -> Result<ValueMap> {
	let desc = kind.as_record().ok_or_else(|| BridgeError::InvalidType { type_name: kind.to_string() })?;
	Ok(record_defaults(desc))
}

/// [`defaults`] for a statically known field type.
pub fn defaults_of<T: Field>() -> Result<ValueMap> {
	defaults(&T::shape())
}

/// Zero-equivalent value for one declared kind.
///
/// Sequences and maps are empty containers rather than `Null`; nested
/// records are expanded recursively. Pointer-like, dynamic and opaque kinds
/// are `Null`.
pub fn zero_value(kind: &Kind) -> Value {
	match kind {
		Kind::Int(_) => Value::I64(0),
		Kind::Uint(_) => Value::U64(0),
		Kind::Float(FloatWidth::F32) => Value::F32(0.0),
		Kind::Float(FloatWidth::F64) => Value::F64(0.0),
		Kind::String => Value::String("".into()),
		Kind::Bool => Value::Bool(false),
		Kind::Seq(_) => Value::Array(Vec::new()),
		Kind::Map(_) => Value::Map(ValueMap::new()),
		Kind::Record(desc) => Value::Map(record_defaults(desc)),
		Kind::Ptr(_) | Kind::Any | Kind::Opaque(_) => Value::Null,
	}
}

fn record_defaults(desc: &RecordDesc) -> ValueMap {
	desc.visible()
		.map(|entry| (entry.name.to_owned(), zero_value(&(entry.kind)())))
		.collect()
}
