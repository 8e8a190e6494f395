use std::collections::BTreeMap;

use fieldbridge::bridge::{BridgeError, Export, Kind, Record, Result, Value, ValueMap, assign, assign_all, export_all};

fieldbridge::record! {
	/// Hours/minutes/seconds/frames position.
	#[derive(Debug, Default, Clone, PartialEq)]
	pub struct Timecode {
		pub hours: u8,
		pub minutes: u8,
		pub seconds: u8,
		pub frames: u16,
	}
}

fieldbridge::record! {
	/// Output encode settings.
	#[derive(Debug, Default, Clone, PartialEq)]
	pub struct VideoSettings {
		pub width: u32,
		pub height: u32,
		pub frame_rate: f64,
		pub bitrate: u64,
		pub hdr: bool,
		pub codec: String,
		pub aspect: String,
		pub tags: Vec<String>,
		pub timecode: Timecode,
		pub background: Option<String>,
		encoder_state: String,
	}
}

fieldbridge::record! {
	/// Time range of a source clip placed on a track.
	#[derive(Debug, Default, Clone, PartialEq)]
	pub struct Segment {
		pub start: f64,
		pub end: f64,
		pub source: String,
		pub speed: f32,
	}
}

fieldbridge::record! {
	/// Timeline track with its segments.
	#[derive(Debug, Default, Clone, PartialEq)]
	pub struct Track {
		pub id: String,
		pub kind: String,
		pub locked: bool,
		pub volume: f32,
		pub segments: Vec<Segment>,
		pub labels: BTreeMap<String, String>,
		pub extra: Value,
		revision: u64,
	}
}

/// Domain checks run after assignment when requested.
pub trait Validate {
	/// Report the first rule violation.
	fn validate(&self) -> Result<()>;
}

impl Validate for Timecode {
	fn validate(&self) -> Result<()> {
		BridgeError::check_range("minutes", f64::from(self.minutes), 0.0, 59.0)?;
		BridgeError::check_range("seconds", f64::from(self.seconds), 0.0, 59.0)
	}
}

impl Validate for VideoSettings {
	fn validate(&self) -> Result<()> {
		if self.width == 0 || self.height == 0 {
			return Err(BridgeError::validation("resolution", format!("{}x{}", self.width, self.height), "must be non-zero"));
		}
		if self.frame_rate.is_nan() || self.frame_rate <= 0.0 {
			return Err(BridgeError::validation("frame_rate", self.frame_rate, "must be positive"));
		}
		if let Some(background) = &self.background {
			fieldbridge::bridge::parse_hex_color(background)?;
		}
		self.timecode.validate()
	}
}

impl Validate for Segment {
	fn validate(&self) -> Result<()> {
		if self.end <= self.start {
			return Err(BridgeError::validation("end", self.end, format!("must be after start {}", self.start)));
		}
		BridgeError::check_range("speed", f64::from(self.speed), 0.1, 16.0)
	}
}

impl Validate for Track {
	fn validate(&self) -> Result<()> {
		BridgeError::check_range("volume", f64::from(self.volume), 0.0, 2.0)?;
		let mut replay = Track::default();
		for segment in &self.segments {
			replay.add_segment(segment.clone())?;
		}
		Ok(())
	}
}

impl Track {
	/// Append a segment, rejecting locked tracks and overlapping ranges.
	pub fn add_segment(&mut self, segment: Segment) -> Result<()> {
		if self.locked {
			return Err(BridgeError::precondition(format!("track {} is unlocked", self.id)));
		}
		segment.validate()?;
		if let Some(other) = self.segments.iter().find(|other| segment.start < other.end && other.start < segment.end) {
			return Err(BridgeError::SegmentOverlap {
				start: segment.start,
				end: segment.end,
				other_start: other.start,
				other_end: other.end,
			});
		}
		self.segments.push(segment);
		self.revision += 1;
		Ok(())
	}
}

/// Demo record types addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
	/// [`Timecode`].
	Timecode,
	/// [`VideoSettings`].
	VideoSettings,
	/// [`Segment`].
	Segment,
	/// [`Track`].
	Track,
}

impl RecordType {
	/// Every registered type, in listing order.
	pub const ALL: [Self; 4] = [Self::Timecode, Self::VideoSettings, Self::Segment, Self::Track];

	/// Resolve a type name, ignoring ASCII case and `_`/`-` separators.
	pub fn parse(name: &str) -> Result<Self> {
		let wanted = normalize(name);
		Self::ALL
			.into_iter()
			.find(|item| normalize(item.type_name()) == wanted)
			.ok_or_else(|| BridgeError::UnknownType { name: name.to_owned() })
	}

	/// Registered record type name.
	pub fn type_name(self) -> &'static str {
		self.kind().as_record().map_or("?", |desc| desc.type_name)
	}

	/// Type descriptor for introspection and defaults.
	pub fn kind(self) -> Kind {
		match self {
			Self::Timecode => Kind::Record(Timecode::descriptor()),
			Self::VideoSettings => Kind::Record(VideoSettings::descriptor()),
			Self::Segment => Kind::Record(Segment::descriptor()),
			Self::Track => Kind::Record(Track::descriptor()),
		}
	}

	/// Assign `source` onto a fresh default instance and export the result.
	///
	/// `attrs` of `None` assigns every visible field.
	pub fn assign_fresh(self, attrs: Option<&[String]>, source: &ValueMap, validate: bool) -> Result<ValueMap> {
		match self {
			Self::Timecode => assign_fresh::<Timecode>(attrs, source, validate),
			Self::VideoSettings => assign_fresh::<VideoSettings>(attrs, source, validate),
			Self::Segment => assign_fresh::<Segment>(attrs, source, validate),
			Self::Track => assign_fresh::<Track>(attrs, source, validate),
		}
	}
}

fn assign_fresh<T>(attrs: Option<&[String]>, source: &ValueMap, validate: bool) -> Result<ValueMap>
where
	T: Record + Export + Validate + Default,
{
	let mut target = T::default();
	match attrs {
		Some(names) => assign(&mut target, names, source)?,
		None => assign_all(&mut target, source)?,
	}
	if validate {
		target.validate()?;
	}
	Ok(export_all(&target))
}

fn normalize(name: &str) -> String {
	name.chars()
		.filter(|c| !matches!(c, '_' | '-'))
		.map(|c| c.to_ascii_lowercase())
		.collect()
}
