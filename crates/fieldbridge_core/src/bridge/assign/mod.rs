use tracing::{debug, trace};

use crate::bridge::{BridgeError, FieldEntry, Record, RecordDesc, Result, Value, ValueMap};

/// Assign the named attributes of `target` from `source`.
///
/// Names the record does not declare, and names missing from `source`, are
/// skipped. The first failure aborts the call: fields assigned before it
/// keep their new values, the failing field and everything after it are
/// left untouched.
pub fn assign<R, I>(target: &mut R, names: I, source: &ValueMap) -> Result<()>
where
	R: Record,
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let desc = R::descriptor();
	for name in names {
		let name = name.as_ref();
		let Some(entry) = desc.entry(name) else {
			trace!(record = desc.type_name, field = name, "skip undeclared attribute");
			continue;
		};
		let Some(value) = source.get(name) else {
			trace!(record = desc.type_name, field = name, "skip attribute absent from source");
			continue;
		};
		assign_entry(target, desc, entry, value)?;
	}
	Ok(())
}

/// [`assign`] over every visible field, in declaration order.
pub fn assign_all<R: Record>(target: &mut R, source: &ValueMap) -> Result<()> {
	assign(target, R::descriptor().visible().map(|entry| entry.name), source)
}

/// Export the named attributes of `source` into a new map.
///
/// Undeclared and hidden names are skipped. Values with the export
/// capability contribute their exported map, others their raw value.
pub fn export<R, I>(source: &R, names: I) -> ValueMap
where
	R: Record,
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let desc = R::descriptor();
	let mut out = ValueMap::new();
	for name in names {
		let name = name.as_ref();
		let Some(entry) = desc.entry(name).filter(|entry| entry.visible) else {
			trace!(record = desc.type_name, field = name, "skip inaccessible attribute");
			continue;
		};
		if let Some(field) = source.field(entry.name) {
			out.insert(entry.name.to_owned(), field.get());
		}
	}
	out
}

/// [`export`] over every visible field.
pub fn export_all<R: Record>(source: &R) -> ValueMap {
	export(source, R::descriptor().visible().map(|entry| entry.name))
}

fn assign_entry<R: Record>(target: &mut R, desc: &RecordDesc, entry: &FieldEntry, value: &Value) -> Result<()> {
	let not_settable = || BridgeError::FieldNotSettable {
		type_name: desc.type_name.to_owned(),
		field: entry.name.to_owned(),
	};

	if !entry.visible {
		debug!(record = desc.type_name, field = entry.name, "rejected write to hidden field");
		return Err(not_settable());
	}
	let field = target.field_mut(entry.name).ok_or_else(not_settable)?;

	if let Value::Map(map) = value
		&& let Some(outcome) = field.import(map)
	{
		debug!(record = desc.type_name, field = entry.name, ok = outcome.is_ok(), "imported nested map");
		return outcome;
	}

	if let Err(mismatch) = field.set(value) {
		debug!(record = desc.type_name, field = entry.name, %mismatch, "coercion failed");
		return Err(mismatch.into_error(entry.name));
	}
	debug!(record = desc.type_name, field = entry.name, "assigned");
	Ok(())
}

#[cfg(test)]
mod tests;
