use std::fmt;

use crate::bridge::RecordDesc;

/// Storage width of a declared integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
	/// 8-bit storage.
	W8,
	/// 16-bit storage.
	W16,
	/// 32-bit storage.
	W32,
	/// 64-bit storage.
	W64,
	/// Pointer-sized storage.
	Size,
}

impl IntWidth {
	/// Storage width in bits on the current target.
	pub fn bits(self) -> u32 {
		match self {
			Self::W8 => 8,
			Self::W16 => 16,
			Self::W32 => 32,
			Self::W64 => 64,
			Self::Size => usize::BITS,
		}
	}

	fn suffix(self) -> &'static str {
		match self {
			Self::W8 => "8",
			Self::W16 => "16",
			Self::W32 => "32",
			Self::W64 => "64",
			Self::Size => "size",
		}
	}
}

/// Storage width of a declared float field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
	/// Single precision.
	F32,
	/// Double precision.
	F64,
}

/// Declared kind of a record field, used as the type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
	/// Signed integer.
	Int(IntWidth),
	/// Unsigned integer.
	Uint(IntWidth),
	/// Floating point number.
	Float(FloatWidth),
	/// UTF-8 text.
	String,
	/// Boolean flag.
	Bool,
	/// Sequence with the given element kind.
	Seq(Box<Kind>),
	/// String-keyed mapping with the given value kind.
	Map(Box<Kind>),
	/// Optional/pointer-like slot around the inner kind.
	Ptr(Box<Kind>),
	/// Dynamically-typed slot that holds any [`Value`](crate::bridge::Value).
	Any,
	/// Registered record type.
	Record(&'static RecordDesc),
	/// Type with no coercion rules, named for diagnostics.
	Opaque(&'static str),
}

impl Kind {
	/// Registered record descriptor when this is a record kind.
	pub fn as_record(&self) -> Option<&'static RecordDesc> {
		match self {
			Self::Record(desc) => Some(desc),
			_ => None,
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(width) => write!(f, "i{}", width.suffix()),
			Self::Uint(width) => write!(f, "u{}", width.suffix()),
			Self::Float(FloatWidth::F32) => f.write_str("f32"),
			Self::Float(FloatWidth::F64) => f.write_str("f64"),
			Self::String => f.write_str("string"),
			Self::Bool => f.write_str("bool"),
			Self::Seq(elem) => write!(f, "seq<{elem}>"),
			Self::Map(value) => write!(f, "map<string, {value}>"),
			Self::Ptr(inner) => write!(f, "option<{inner}>"),
			Self::Any => f.write_str("any"),
			Self::Record(desc) => f.write_str(desc.type_name),
			Self::Opaque(name) => f.write_str(name),
		}
	}
}
