use crate::bridge::{Field, RecordDesc};

/// Record type with a registered field table and named field handles.
///
/// Usually implemented through [`record!`](crate::record).
pub trait Record {
	/// Static field table for this type.
	fn descriptor() -> &'static RecordDesc
	where
		Self: Sized;

	/// Read handle for a declared field.
	fn field(&self, name: &str) -> Option<&dyn Field>;

	/// Write handle for a declared field.
	fn field_mut(&mut self, name: &str) -> Option<&mut dyn Field>;
}

/// Declare a struct and register it as a [`Record`].
///
/// Generates the struct itself, its static field table (in declaration
/// order, `pub` fields visible, others hidden), named field handles, the
/// [`Import`](crate::bridge::Import)/[`Export`](crate::bridge::Export)
/// capability, and a [`Field`] impl so the type can nest in other records.
/// Every field type must implement [`Field`]. The struct must be `Clone`:
/// nested imports run on a copy and only replace the field once every
/// attribute applied. Nested records also need `Default` when wrapped in
/// collections or `Option`.
///
/// ```
/// fieldbridge::record! {
/// 	#[derive(Debug, Default, Clone)]
/// 	pub struct Marker {
/// 		pub label: String,
/// 		pub frame: i64,
/// 	}
/// }
///
/// let desc = <Marker as fieldbridge::bridge::Record>::descriptor();
/// assert_eq!(desc.type_name, "Marker");
/// assert_eq!(desc.fields.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field_vis:vis $field:ident : $field_ty:ty
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$(
				$(#[$field_meta])*
				$field_vis $field: $field_ty,
			)*
		}

		impl $crate::bridge::Record for $name {
			fn descriptor() -> &'static $crate::bridge::RecordDesc {
				static DESC: $crate::bridge::RecordDesc = $crate::bridge::RecordDesc {
					type_name: stringify!($name),
					fields: &[
						$(
							$crate::bridge::FieldEntry {
								name: stringify!($field),
								visible: !stringify!($field_vis).is_empty(),
								kind: <$field_ty as $crate::bridge::Field>::shape,
							},
						)*
					],
				};
				&DESC
			}

			#[allow(unreachable_patterns)]
			fn field(&self, name: &str) -> ::std::option::Option<&dyn $crate::bridge::Field> {
				match name {
					$(stringify!($field) => Some(&self.$field),)*
					_ => None,
				}
			}

			#[allow(unreachable_patterns)]
			fn field_mut(&mut self, name: &str) -> ::std::option::Option<&mut dyn $crate::bridge::Field> {
				match name {
					$(stringify!($field) => Some(&mut self.$field),)*
					_ => None,
				}
			}
		}

		impl $crate::bridge::Import for $name {
			fn import_map(&mut self, map: &$crate::bridge::ValueMap) -> $crate::bridge::Result<()> {
				$crate::bridge::assign_all(self, map)
			}
		}

		impl $crate::bridge::Export for $name {
			fn export_map(&self) -> $crate::bridge::ValueMap {
				$crate::bridge::export_all(self)
			}
		}

		impl $crate::bridge::Field for $name {
			fn shape() -> $crate::bridge::Kind {
				$crate::bridge::Kind::Record(<Self as $crate::bridge::Record>::descriptor())
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
