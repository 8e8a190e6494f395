use thiserror::Error;

use crate::bridge::Value;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors produced while introspecting, assigning, and exporting record fields.
#[derive(Debug, Error)]
pub enum BridgeError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON text could not be parsed or rendered.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Descriptor does not denote a record type.
	#[error("invalid type: {type_name} is not a record")]
	InvalidType {
		/// Label of the offending kind.
		type_name: String,
	},
	/// Field exists on the record but is not writable.
	#[error("field {type_name}.{field} is not settable")]
	FieldNotSettable {
		/// Record type name.
		type_name: String,
		/// Field that was addressed.
		field: String,
	},
	/// Source value could not be converted to the field's declared kind.
	#[error("cannot coerce {field}: {source_kind} {value} to {target_kind}")]
	Coercion {
		/// Attribute name being assigned.
		field: String,
		/// Source value as received.
		value: Value,
		/// Kind label of the source value.
		source_kind: &'static str,
		/// Kind label of the target field.
		target_kind: String,
	},
	/// Referenced track id does not exist.
	#[error("track not found: {track_id}")]
	TrackNotFound {
		/// Requested track id.
		track_id: String,
	},
	/// Segment time range intersects an existing one.
	#[error("segment overlap: [{start}, {end}) intersects [{other_start}, {other_end})")]
	SegmentOverlap {
		/// New segment start.
		start: f64,
		/// New segment end.
		end: f64,
		/// Existing segment start.
		other_start: f64,
		/// Existing segment end.
		other_end: f64,
	},
	/// Field value failed a domain rule.
	#[error("validation error: {field}={value}: {reason}")]
	Validation {
		/// Field being validated.
		field: String,
		/// Rendered offending value.
		value: String,
		/// Human-readable rule description.
		reason: String,
	},
	/// Value could not be converted between named representations.
	///
	/// Reserved for callers converting outside the field rules; the
	/// assignor reports [`BridgeError::Coercion`] instead.
	#[error("type conversion error: cannot convert {value} from {from} to {to}")]
	TypeConversion {
		/// Rendered source value.
		value: String,
		/// Source representation label.
		from: String,
		/// Target representation label.
		to: String,
	},
	/// Numeric value fell outside inclusive bounds.
	#[error("{name} out of range: {value} not in [{min}, {max}]")]
	OutOfRange {
		/// Quantity name.
		name: String,
		/// Offending value.
		value: f64,
		/// Inclusive lower bound.
		min: f64,
		/// Inclusive upper bound.
		max: f64,
	},
	/// Operation precondition did not hold.
	#[error("precondition failed: {condition}")]
	PreconditionFailed {
		/// Condition text that was violated.
		condition: String,
	},
	/// Hex color literal was malformed.
	#[error("invalid color: {input:?}")]
	InvalidColor {
		/// User-provided color text.
		input: String,
	},
	/// Input document was not a JSON object.
	#[error("{what} is not a JSON object")]
	NotAnObject {
		/// Description of the rejected input.
		what: String,
	},
	/// Requested record type is not registered.
	#[error("unknown record type: {name}")]
	UnknownType {
		/// Requested type name.
		name: String,
	},
}

/// Stable classification tag for [`BridgeError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// IO failure.
	Io,
	/// JSON syntax or rendering failure.
	Json,
	/// Non-record descriptor.
	InvalidType,
	/// Hidden field write.
	FieldNotSettable,
	/// Failed coercion.
	Coercion,
	/// Missing track.
	TrackNotFound,
	/// Overlapping segment.
	SegmentOverlap,
	/// Domain rule failure.
	Validation,
	/// Representation conversion failure.
	TypeConversion,
	/// Bounds failure.
	OutOfRange,
	/// Precondition failure.
	PreconditionFailed,
	/// Malformed color.
	InvalidColor,
	/// Non-object input.
	NotAnObject,
	/// Unregistered record type.
	UnknownType,
}

impl ErrorKind {
	/// Stable snake_case code for machine-readable output.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Io => "io",
			Self::Json => "json",
			Self::InvalidType => "invalid_type",
			Self::FieldNotSettable => "field_not_settable",
			Self::Coercion => "coercion",
			Self::TrackNotFound => "track_not_found",
			Self::SegmentOverlap => "segment_overlap",
			Self::Validation => "validation",
			Self::TypeConversion => "type_conversion",
			Self::OutOfRange => "out_of_range",
			Self::PreconditionFailed => "precondition_failed",
			Self::InvalidColor => "invalid_color",
			Self::NotAnObject => "not_an_object",
			Self::UnknownType => "unknown_type",
		}
	}
}

impl BridgeError {
	/// Build a validation error from displayable parts.
	pub fn validation(field: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> Self {
		Self::Validation {
			field: field.into(),
			value: value.to_string(),
			reason: reason.into(),
		}
	}

	/// Build a type conversion error from displayable parts. Not raised by
	/// this crate; see [`BridgeError::TypeConversion`].
	pub fn type_conversion(value: impl ToString, from: impl Into<String>, to: impl Into<String>) -> Self {
		Self::TypeConversion {
			value: value.to_string(),
			from: from.into(),
			to: to.into(),
		}
	}

	/// Build a precondition error.
	pub fn precondition(condition: impl Into<String>) -> Self {
		Self::PreconditionFailed { condition: condition.into() }
	}

	/// Check `min <= value <= max`, reporting `OutOfRange` otherwise.
	pub fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<()> {
		if value >= min && value <= max {
			return Ok(());
		}
		Err(Self::OutOfRange {
			name: name.to_owned(),
			value,
			min,
			max,
		})
	}

	/// Classification tag for this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) => ErrorKind::Io,
			Self::Json(_) => ErrorKind::Json,
			Self::InvalidType { .. } => ErrorKind::InvalidType,
			Self::FieldNotSettable { .. } => ErrorKind::FieldNotSettable,
			Self::Coercion { .. } => ErrorKind::Coercion,
			Self::TrackNotFound { .. } => ErrorKind::TrackNotFound,
			Self::SegmentOverlap { .. } => ErrorKind::SegmentOverlap,
			Self::Validation { .. } => ErrorKind::Validation,
			Self::TypeConversion { .. } => ErrorKind::TypeConversion,
			Self::OutOfRange { .. } => ErrorKind::OutOfRange,
			Self::PreconditionFailed { .. } => ErrorKind::PreconditionFailed,
			Self::InvalidColor { .. } => ErrorKind::InvalidColor,
			Self::NotAnObject { .. } => ErrorKind::NotAnObject,
			Self::UnknownType { .. } => ErrorKind::UnknownType,
		}
	}

	/// Whether the error reports a missing entity.
	pub fn is_not_found(&self) -> bool {
		matches!(self.kind(), ErrorKind::TrackNotFound | ErrorKind::UnknownType)
	}

	/// Whether the error reports rejected input data.
	pub fn is_validation(&self) -> bool {
		matches!(
			self.kind(),
			ErrorKind::Validation | ErrorKind::OutOfRange | ErrorKind::SegmentOverlap | ErrorKind::InvalidColor
		)
	}

	/// Whether the error comes from value conversion.
	pub fn is_coercion(&self) -> bool {
		matches!(self.kind(), ErrorKind::Coercion | ErrorKind::TypeConversion)
	}
}
