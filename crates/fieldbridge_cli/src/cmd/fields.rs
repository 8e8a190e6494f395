use fieldbridge::bridge::fields;

use crate::cmd::records::RecordType;
use crate::cmd::util::{OutputOptions, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long = "type")]
	pub type_name: String,
	#[arg(long)]
	pub json: bool,
	#[arg(long)]
	pub pretty: bool,
}

/// List the visible fields of a record type with their kind labels.
pub fn run(args: Args) -> fieldbridge::bridge::Result<()> {
	let record = RecordType::parse(&args.type_name)?;
	let items = fields(&record.kind())?;

	if args.json {
		let payload = FieldsJson {
			type_name: record.type_name(),
			fields: items
				.iter()
				.map(|item| FieldJson {
					name: item.name,
					kind: item.kind.to_string(),
				})
				.collect(),
		};
		return emit_json(&payload, OutputOptions::from_flag(args.pretty));
	}

	println!("type: {}", record.type_name());
	println!("field_count: {}", items.len());
	for item in &items {
		println!("  {}\t{}", item.name, item.kind);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct FieldsJson {
	#[serde(rename = "type")]
	type_name: &'static str,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: &'static str,
	kind: String,
}
