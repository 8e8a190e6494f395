use std::collections::{BTreeMap, HashMap};

use crate::bridge::coerce::coerce;
use crate::bridge::{FloatWidth, IntWidth, Kind, Mismatch, Result, Value, ValueMap};

/// Storage type of one record field: declares its kind and applies the
/// coercion rules for that kind.
pub trait Field {
	/// Declared kind of this field type.
	fn shape() -> Kind
	where
		Self: Sized;

	/// Coerce `value` and overwrite `self`. On error `self` is untouched.
	fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch>;

	/// Current value as exported.
	fn get(&self) -> Value;

	/// Import capability hook, tried before [`Field::set`] when the source is
	/// a map. `None` means the type has no such capability.
	fn import(&mut self, _map: &ValueMap) -> Option<Result<()>> {
		None
	}
}

/// Capability: update `self` from an attribute map.
pub trait Import {
	/// Apply `map` onto `self`.
	fn import_map(&mut self, map: &ValueMap) -> Result<()>;
}

/// Capability: render `self` as an attribute map.
pub trait Export {
	/// Produce the exported map.
	fn export_map(&self) -> ValueMap;
}

macro_rules! int_field {
	($($ty:ty => $width:ident),* $(,)?) => {
		$(
			impl Field for $ty {
				fn shape() -> Kind {
					Kind::Int(IntWidth::$width)
				}

				fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
					match coerce(value, &Self::shape())? {
						Value::I64(v) => *self = v as $ty,
						_ => return Err(Mismatch::new(value, &Self::shape())),
					}
					Ok(())
				}

				fn get(&self) -> Value {
					Value::I64(*self as i64)
				}
			}
		)*
	};
}

macro_rules! uint_field {
	($($ty:ty => $width:ident),* $(,)?) => {
		$(
			impl Field for $ty {
				fn shape() -> Kind {
					Kind::Uint(IntWidth::$width)
				}

				fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
					match coerce(value, &Self::shape())? {
						Value::U64(v) => *self = v as $ty,
						_ => return Err(Mismatch::new(value, &Self::shape())),
					}
					Ok(())
				}

				fn get(&self) -> Value {
					Value::U64(*self as u64)
				}
			}
		)*
	};
}

int_field! {
	i8 => W8,
	i16 => W16,
	i32 => W32,
	i64 => W64,
	isize => Size,
}

uint_field! {
	u8 => W8,
	u16 => W16,
	u32 => W32,
	u64 => W64,
	usize => Size,
}

impl Field for f32 {
	fn shape() -> Kind {
		Kind::Float(FloatWidth::F32)
	}

	fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
		match coerce(value, &Self::shape())? {
			Value::F32(v) => *self = v,
			_ => return Err(Mismatch::new(value, &Self::shape())),
		}
		Ok(())
	}

	fn get(&self) -> Value {
		Value::F32(*self)
	}
}

impl Field for f64 {
	fn shape() -> Kind {
		Kind::Float(FloatWidth::F64)
	}

	fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
		match coerce(value, &Self::shape())? {
			Value::F64(v) => *self = v,
			_ => return Err(Mismatch::new(value, &Self::shape())),
		}
		Ok(())
	}

	fn get(&self) -> Value {
		Value::F64(*self)
	}
}

impl Field for String {
	fn shape() -> Kind {
		Kind::String
	}

	fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
		match coerce(value, &Self::shape())? {
			Value::String(text) => *self = text.into_string(),
			_ => return Err(Mismatch::new(value, &Self::shape())),
		}
		Ok(())
	}

	fn get(&self) -> Value {
		Value::String(self.as_str().into())
	}
}

impl Field for bool {
	fn shape() -> Kind {
		Kind::Bool
	}

	fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
		match coerce(value, &Self::shape())? {
			Value::Bool(v) => *self = v,
			_ => return Err(Mismatch::new(value, &Self::shape())),
		}
		Ok(())
	}

	fn get(&self) -> Value {
		Value::Bool(*self)
	}
}

impl Field for Value {
	fn shape() -> Kind {
		Kind::Any
	}

	fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
		*self = coerce(value, &Self::shape())?;
		Ok(())
	}

	fn get(&self) -> Value {
		self.clone()
	}
}

impl<T: Field + Default> Field for Vec<T> {
	fn shape() -> Kind {
		Kind::Seq(Box::new(T::shape()))
	}

	fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
		let Value::Array(items) = coerce(value, &Self::shape())? else {
			return Err(Mismatch::new(value, &Self::shape()));
		};
		*self = items.iter().map(build::<T>).collect::<std::result::Result<_, _>>()?;
		Ok(())
	}

	fn get(&self) -> Value {
		Value::Array(self.iter().map(Field::get).collect())
	}
}

impl<T: Field + Default> Field for BTreeMap<String, T> {
	fn shape() -> Kind {
		Kind::Map(Box::new(T::shape()))
	}

	fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
		let Value::Map(map) = coerce(value, &Self::shape())? else {
			return Err(Mismatch::new(value, &Self::shape()));
		};
		*self = map
			.iter()
			.map(|(key, item)| Ok((key.clone(), build::<T>(item)?)))
			.collect::<std::result::Result<_, Mismatch>>()?;
		Ok(())
	}

	fn get(&self) -> Value {
		Value::Map(self.iter().map(|(key, item)| (key.clone(), item.get())).collect())
	}
}

impl<T: Field + Default> Field for HashMap<String, T> {
	fn shape() -> Kind {
		Kind::Map(Box::new(T::shape()))
	}

	fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
		let Value::Map(map) = coerce(value, &Self::shape())? else {
			return Err(Mismatch::new(value, &Self::shape()));
		};
		*self = map
			.iter()
			.map(|(key, item)| Ok((key.clone(), build::<T>(item)?)))
			.collect::<std::result::Result<_, Mismatch>>()?;
		Ok(())
	}

	fn get(&self) -> Value {
		Value::Map(self.iter().map(|(key, item)| (key.clone(), item.get())).collect())
	}
}

impl<T: Field + Default> Field for Option<T> {
	fn shape() -> Kind {
		Kind::Ptr(Box::new(T::shape()))
	}

	fn set(&mut self, value: &Value) -> std::result::Result<(), Mismatch> {
		*self = match coerce(value, &Self::shape())? {
			Value::Null => None,
			canonical => Some(build::<T>(&canonical)?),
		};
		Ok(())
	}

	fn get(&self) -> Value {
		self.as_ref().map_or(Value::Null, Field::get)
	}

	// Inner imports stage their own writes, so a failure leaves `self` as it was.
	fn import(&mut self, map: &ValueMap) -> Option<Result<()>> {
		if let Some(inner) = self {
			return inner.import(map);
		}
		let mut inner = T::default();
		let outcome = inner.import(map)?;
		if outcome.is_ok() {
			*self = Some(inner);
		}
		Some(outcome)
	}
}

fn build<T: Field + Default>(value: &Value) -> std::result::Result<T, Mismatch> {
	let mut out = T::default();
	out.set(value)?;
	Ok(out)
}

/// Register a type with hand-written [`Import`]/[`Export`] impls as a field
/// type. Maps go through the capability; every other source is rejected.
///
/// The type must be `Clone`: imports run on a copy that replaces `self` only
/// when the whole map applied.
#[macro_export]
macro_rules! capability_field {
	($ty:ty) => {
		impl $crate::bridge::Field for $ty {
			fn shape() -> $crate::bridge::Kind {
				$crate::bridge::Kind::Opaque(stringify!($ty))
			}

			fn set(&mut self, value: &$crate::bridge::Value) -> ::std::result::Result<(), $crate::bridge::Mismatch> {
				let shape = <Self as $crate::bridge::Field>::shape();
				let $crate::bridge::Value::Map(map) = $crate::bridge::coerce(value, &shape)? else {
					return Err($crate::bridge::Mismatch::new(value, &shape));
				};
				match $crate::bridge::Field::import(self, &map) {
					Some(Ok(())) => Ok(()),
					_ => Err($crate::bridge::Mismatch::new(value, &shape)),
				}
			}

			fn get(&self) -> $crate::bridge::Value {
				$crate::bridge::Value::Map($crate::bridge::Export::export_map(self))
			}

			fn import(&mut self, map: &$crate::bridge::ValueMap) -> ::std::option::Option<$crate::bridge::Result<()>> {
				let mut staged = ::std::clone::Clone::clone(self);
				if let Err(err) = $crate::bridge::Import::import_map(&mut staged, map) {
					return Some(Err(err));
				}
				*self = staged;
				Some(Ok(()))
			}
		}
	};
}
