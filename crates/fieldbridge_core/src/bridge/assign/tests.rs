use pretty_assertions::assert_eq;

use super::{assign, assign_all, export, export_all};
use crate::bridge::{BridgeError, ErrorKind, Export, Import, Record, Result, Value, ValueMap, coerce};

crate::record! {
	#[derive(Debug, Default, Clone, PartialEq)]
	pub struct Timecode {
		pub hours: u8,
		pub minutes: u8,
		pub seconds: u8,
		pub frames: u16,
	}
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Aspect {
	num: u32,
	den: u32,
}

impl Import for Aspect {
	fn import_map(&mut self, map: &ValueMap) -> Result<()> {
		let ratio = map.get("ratio").and_then(Value::as_str).unwrap_or_default();
		let parsed = ratio
			.split_once(':')
			.and_then(|(num, den)| Some((num.parse::<u32>().ok()?, den.parse::<u32>().ok()?)));
		let (num, den) = parsed.ok_or_else(|| BridgeError::validation("ratio", ratio, "expected N:D"))?;
		self.num = num;
		self.den = den;
		Ok(())
	}
}

impl Export for Aspect {
	fn export_map(&self) -> ValueMap {
		let mut out = ValueMap::new();
		out.insert("ratio".to_owned(), Value::from(format!("{}:{}", self.num, self.den)));
		out
	}
}

crate::capability_field!(Aspect);

crate::record! {
	#[derive(Debug, Default, Clone, PartialEq)]
	pub struct VideoSettings {
		pub width: i64,
		pub height: i32,
		pub frame_rate: f64,
		pub bitrate: u64,
		pub hdr: bool,
		pub codec: String,
		pub tags: Vec<String>,
		pub timecode: Timecode,
		pub proxy: Option<Timecode>,
		pub aspect: Aspect,
		render_token: String,
	}
}

fn source(pairs: &[(&str, Value)]) -> ValueMap {
	pairs.iter().map(|(key, value)| ((*key).to_owned(), value.clone())).collect()
}

fn coercion_field(err: &BridgeError) -> &str {
	match err {
		BridgeError::Coercion { field, .. } => field.as_str(),
		other => panic!("expected coercion error, got {other:?}"),
	}
}

#[test]
fn numeric_strings_are_coerced_per_field_kind() {
	let mut settings = VideoSettings::default();
	let map = source(&[
		("width", Value::from("1920")),
		("frame_rate", Value::from("29.97")),
		("hdr", Value::from("true")),
		("codec", Value::I64(264)),
	]);

	assign(&mut settings, ["width", "frame_rate", "hdr", "codec"], &map).expect("assign succeeds");

	assert_eq!(settings.width, 1920);
	assert_eq!(settings.frame_rate, 29.97);
	assert!(settings.hdr);
	assert_eq!(settings.codec, "264");
}

#[test]
fn float_source_truncates_into_integer_field() {
	let mut settings = VideoSettings::default();
	assign(&mut settings, ["height"], &source(&[("height", Value::F64(85.9))])).expect("assign succeeds");
	assert_eq!(settings.height, 85);
}

#[test]
fn negative_into_unsigned_is_a_coercion_error() {
	let mut settings = VideoSettings::default();
	let err = assign(&mut settings, ["bitrate"], &source(&[("bitrate", Value::I64(-100))])).expect_err("negative bitrate");

	assert_eq!(err.kind(), ErrorKind::Coercion);
	assert_eq!(coercion_field(&err), "bitrate");
	assert_eq!(err.to_string(), "cannot coerce bitrate: i64 -100 to u64");
	assert_eq!(settings.bitrate, 0);
}

#[test]
fn fail_fast_keeps_earlier_writes() {
	let mut settings = VideoSettings {
		codec: "prores".to_owned(),
		..VideoSettings::default()
	};
	let map = source(&[
		("width", Value::I64(1280)),
		("bitrate", Value::from("-5")),
		("codec", Value::from("h264")),
	]);

	let err = assign(&mut settings, ["width", "bitrate", "codec"], &map).expect_err("bitrate fails");

	assert_eq!(coercion_field(&err), "bitrate");
	assert_eq!(settings.width, 1280, "earlier field stays committed");
	assert_eq!(settings.bitrate, 0, "failing field untouched");
	assert_eq!(settings.codec, "prores", "later field never reached");
}

#[test]
fn unknown_and_absent_names_are_skipped() {
	let original = VideoSettings {
		width: 640,
		height: 480,
		..VideoSettings::default()
	};
	let mut settings = original.clone();
	let map = source(&[("no_such_field", Value::I64(1)), ("height", Value::I64(720))]);

	assign(&mut settings, ["no_such_field", "width", "height"], &map).expect("assign succeeds");

	assert_eq!(settings.width, 640, "absent from source");
	assert_eq!(settings.height, 720);

	let exported = export(&settings, ["no_such_field", "width"]);
	assert_eq!(exported.len(), 1);
	assert_eq!(exported.get("width"), Some(&Value::I64(640)));
}

#[test]
fn hidden_field_write_is_rejected_only_when_provided() {
	let mut settings = VideoSettings::default();
	let err = assign(&mut settings, ["render_token"], &source(&[("render_token", Value::from("x"))])).expect_err("hidden");
	assert_eq!(err.kind(), ErrorKind::FieldNotSettable);
	assert_eq!(err.to_string(), "field VideoSettings.render_token is not settable");
	assert_eq!(settings.render_token, "");

	assign(&mut settings, ["render_token"], &ValueMap::new()).expect("absent hidden field is skipped");
	assert!(!export(&settings, ["render_token"]).contains_key("render_token"));
}

#[test]
fn nested_record_imports_from_map() {
	let mut settings = VideoSettings::default();
	settings.timecode.seconds = 30;
	let timecode = source(&[("hours", Value::from("1")), ("frames", Value::F64(12.0))]);

	assign(&mut settings, ["timecode"], &source(&[("timecode", Value::Map(timecode))])).expect("assign succeeds");

	assert_eq!(
		settings.timecode,
		Timecode {
			hours: 1,
			minutes: 0,
			seconds: 30,
			frames: 12,
		}
	);
}

#[test]
fn nested_failure_propagates_unchanged() {
	let mut settings = VideoSettings::default();
	let timecode = source(&[("minutes", Value::from("ten"))]);

	let err = assign(&mut settings, ["timecode"], &source(&[("timecode", Value::Map(timecode))])).expect_err("nested fails");
	assert_eq!(coercion_field(&err), "minutes");
}

#[test]
fn failed_nested_import_leaves_record_untouched() {
	let mut settings = VideoSettings::default();
	settings.timecode.seconds = 30;
	let before = settings.timecode.clone();
	let timecode = source(&[("hours", Value::I64(5)), ("minutes", Value::from("ten"))]);

	let err = assign(&mut settings, ["timecode"], &source(&[("timecode", Value::Map(timecode))])).expect_err("minutes fails");

	assert_eq!(coercion_field(&err), "minutes");
	assert_eq!(settings.timecode, before, "hours must not be committed");
}

#[test]
fn failed_optional_import_keeps_existing_value() {
	let mut settings = VideoSettings {
		proxy: Some(Timecode {
			hours: 1,
			..Timecode::default()
		}),
		..VideoSettings::default()
	};
	let before = settings.proxy.clone();
	let proxy = source(&[("hours", Value::I64(9)), ("frames", Value::from("x"))]);

	assign(&mut settings, ["proxy"], &source(&[("proxy", Value::Map(proxy))])).expect_err("frames fails");
	assert_eq!(settings.proxy, before);

	settings.proxy = None;
	let proxy = source(&[("hours", Value::I64(9)), ("frames", Value::from("x"))]);
	assign(&mut settings, ["proxy"], &source(&[("proxy", Value::Map(proxy))])).expect_err("frames fails");
	assert_eq!(settings.proxy, None);
}

#[test]
fn coerce_and_assign_accept_the_same_values() {
	let timecode = |pairs: &[(&str, Value)]| Value::Map(source(pairs));
	let cases = [
		("width", Value::from("1920")),
		("width", Value::from("19px")),
		("height", Value::F64(85.9)),
		("bitrate", Value::I64(-100)),
		("frame_rate", Value::Bool(true)),
		("hdr", Value::from("1")),
		("hdr", Value::from("yes")),
		("codec", Value::Array(vec![Value::I64(1)])),
		("tags", Value::Array(vec![Value::from("intro")])),
		("tags", Value::Array(vec![Value::from("intro"), Value::I64(3)])),
		("timecode", timecode(&[("hours", Value::from("1")), ("extra", Value::Bool(true))])),
		("timecode", timecode(&[("minutes", Value::from("ten"))])),
		("timecode", Value::from("01:00:00:00")),
		("proxy", timecode(&[("hours", Value::I64(2))])),
		("proxy", timecode(&[("frames", Value::from("x"))])),
		("proxy", Value::Null),
		("proxy", Value::I64(3)),
	];

	for (name, value) in cases {
		let entry = VideoSettings::descriptor().entry(name).expect("declared field");
		let coerced = coerce(&value, &(entry.kind)());
		let assigned = assign(&mut VideoSettings::default(), [name], &source(&[(name, value.clone())]));
		assert_eq!(coerced.is_ok(), assigned.is_ok(), "{name} = {value}: coerce {coerced:?}, assign {assigned:?}");
	}
}

#[test]
fn coerced_scalars_are_what_assign_stores() {
	let cases = [
		("width", Value::from("1920")),
		("height", Value::F64(-85.9)),
		("bitrate", Value::from("8000")),
		("frame_rate", Value::I64(24)),
		("hdr", Value::F64(0.0)),
		("codec", Value::U64(264)),
	];

	for (name, value) in cases {
		let entry = VideoSettings::descriptor().entry(name).expect("declared field");
		let coerced = coerce(&value, &(entry.kind)()).expect("coerces");
		let mut settings = VideoSettings::default();
		assign(&mut settings, [name], &source(&[(name, value)])).expect("assigns");
		assert_eq!(export(&settings, [name]).get(name), Some(&coerced), "{name}");
	}
}

#[test]
fn nested_record_rejects_non_map_source() {
	let mut settings = VideoSettings::default();
	let err = assign(&mut settings, ["timecode"], &source(&[("timecode", Value::from("01:00:00:00"))])).expect_err("not a map");
	match err {
		BridgeError::Coercion { field, target_kind, .. } => {
			assert_eq!(field, "timecode");
			assert_eq!(target_kind, "Timecode");
		}
		other => panic!("unexpected error {other:?}"),
	}
}

#[test]
fn optional_nested_record_is_created_and_cleared() {
	let mut settings = VideoSettings::default();
	let proxy = source(&[("hours", Value::I64(2))]);

	assign(&mut settings, ["proxy"], &source(&[("proxy", Value::Map(proxy))])).expect("assign succeeds");
	assert_eq!(settings.proxy.as_ref().map(|tc| tc.hours), Some(2));

	assign(&mut settings, ["proxy"], &source(&[("proxy", Value::Null)])).expect("assign succeeds");
	assert_eq!(settings.proxy, None);
}

#[test]
fn sequences_are_assigned_only_when_shape_matches() {
	let mut settings = VideoSettings::default();
	let tags = Value::Array(vec![Value::from("intro"), Value::from("b-roll")]);
	assign(&mut settings, ["tags"], &source(&[("tags", tags)])).expect("assign succeeds");
	assert_eq!(settings.tags, vec!["intro".to_owned(), "b-roll".to_owned()]);

	let mixed = Value::Array(vec![Value::from("outro"), Value::I64(3)]);
	let err = assign(&mut settings, ["tags"], &source(&[("tags", mixed)])).expect_err("mixed elements");
	assert_eq!(coercion_field(&err), "tags");
	assert_eq!(settings.tags.len(), 2, "no partial write");
}

#[test]
fn capability_type_imports_and_exports_itself() {
	let mut settings = VideoSettings::default();
	let aspect = source(&[("ratio", Value::from("16:9"))]);
	assign(&mut settings, ["aspect"], &source(&[("aspect", Value::Map(aspect.clone()))])).expect("assign succeeds");
	assert_eq!(settings.aspect, Aspect { num: 16, den: 9 });

	let exported = export(&settings, ["aspect"]);
	assert_eq!(exported.get("aspect"), Some(&Value::Map(aspect)));

	let bad = source(&[("ratio", Value::from("wide"))]);
	let err = assign(&mut settings, ["aspect"], &source(&[("aspect", Value::Map(bad))])).expect_err("bad ratio");
	assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn export_uses_raw_values_and_nested_maps() {
	let settings = VideoSettings {
		width: 3840,
		bitrate: 45_000,
		codec: "hevc".to_owned(),
		timecode: Timecode {
			hours: 1,
			..Timecode::default()
		},
		..VideoSettings::default()
	};

	let exported = export_all(&settings);

	assert_eq!(exported.get("width"), Some(&Value::I64(3840)));
	assert_eq!(exported.get("bitrate"), Some(&Value::U64(45_000)));
	assert_eq!(exported.get("codec"), Some(&Value::from("hevc")));
	assert_eq!(exported.get("proxy"), Some(&Value::Null));
	let timecode = exported.get("timecode").and_then(Value::as_map).expect("timecode exported as map");
	assert_eq!(timecode.get("hours"), Some(&Value::U64(1)));
	assert!(!exported.contains_key("render_token"));
}

#[test]
fn scalar_round_trip_through_export() {
	let original = VideoSettings {
		width: 1920,
		height: 1080,
		frame_rate: 23.976,
		bitrate: 8_000_000,
		hdr: true,
		codec: "av1".to_owned(),
		..VideoSettings::default()
	};
	let names = ["width", "height", "frame_rate", "bitrate", "hdr", "codec"];

	let exported = export(&original, names);
	let mut copy = VideoSettings::default();
	assign(&mut copy, names, &exported).expect("assign succeeds");

	assert_eq!(copy, original);
}

#[test]
fn assign_all_covers_visible_fields_only() {
	let mut settings = VideoSettings::default();
	let map = source(&[("width", Value::I64(720)), ("codec", Value::from("vp9")), ("render_token", Value::from("skip"))]);

	assign_all(&mut settings, &map).expect("hidden field not addressed");

	assert_eq!(settings.width, 720);
	assert_eq!(settings.codec, "vp9");
	assert_eq!(settings.render_token, "");
}
