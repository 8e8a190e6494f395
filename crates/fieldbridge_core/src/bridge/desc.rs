use crate::bridge::{BridgeError, Field, Kind, Result};

/// Registered field table for one record type.
#[derive(Debug)]
pub struct RecordDesc {
	/// Record type name.
	pub type_name: &'static str,
	/// Field entries in declaration order, hidden ones included.
	pub fields: &'static [FieldEntry],
}

/// One registered field declaration.
#[derive(Debug, Clone, Copy)]
pub struct FieldEntry {
	/// Field name, unique within the record.
	pub name: &'static str,
	/// Whether the field is visible to introspection and writable.
	pub visible: bool,
	/// Declared kind of the field's type.
	pub kind: fn() -> Kind,
}

/// Visible field name and its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
	/// Field name.
	pub name: &'static str,
	/// Declared kind.
	pub kind: Kind,
}

impl RecordDesc {
	/// Look up any declared field, hidden ones included.
	pub fn entry(&self, name: &str) -> Option<&FieldEntry> {
		self.fields.iter().find(|entry| entry.name == name)
	}

	/// Iterate visible field entries in declaration order.
	pub fn visible(&self) -> impl Iterator<Item = &FieldEntry> {
		self.fields.iter().filter(|entry| entry.visible)
	}
}

impl PartialEq for RecordDesc {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other) || self.type_name == other.type_name
	}
}

/// Enumerate visible fields of a record kind in declaration order.
///
/// Nested records are reported by kind only, not expanded.
pub fn fields(kind: &Kind) -> Result<Vec<FieldDescriptor>> {
	let desc = kind.as_record().ok_or_else(|| BridgeError::InvalidType { type_name: kind.to_string() })?;
	Ok(desc
		.visible()
		.map(|entry| FieldDescriptor {
			name: entry.name,
			kind: (entry.kind)(),
		})
		.collect())
}

/// [`fields`] for a statically known field type.
pub fn fields_of<T: Field>() -> Result<Vec<FieldDescriptor>> {
	fields(&T::shape())
}
