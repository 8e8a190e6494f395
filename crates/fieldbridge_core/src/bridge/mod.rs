mod assign;
mod coerce;
mod color;
mod defaults;
mod desc;
mod error;
mod field;
mod kind;
mod pathstyle;
mod record;
mod urlhash;
mod value;

/// Attribute assignment and export entry points.
pub use assign::{assign, assign_all, export, export_all};
/// Coercion matrix and per-kind conversion rules.
pub use coerce::{Mismatch, coerce, is_assignable, parse_bool, to_bool, to_float, to_int, to_text, to_uint};
/// Hex color parsing.
pub use color::{Rgba, parse_hex_color};
/// Default value synthesis.
pub use defaults::{defaults, defaults_of, zero_value};
/// Record field tables and introspection.
pub use desc::{FieldDescriptor, FieldEntry, RecordDesc, fields, fields_of};
/// Error taxonomy and result alias.
pub use error::{BridgeError, ErrorKind, Result};
/// Field storage trait and import/export capabilities.
pub use field::{Export, Field, Import};
/// Declared field kinds.
pub use kind::{FloatWidth, IntWidth, Kind};
/// Path style detection.
pub use pathstyle::{PathStyle, detect_path_style};
/// Registered record trait.
pub use record::Record;
/// URL hashing.
pub use urlhash::hash_url;
/// Loosely-typed source values.
pub use value::{Value, ValueMap, map_from_json, map_to_json};
