use std::path::PathBuf;

use fieldbridge::bridge::{map_from_json, map_to_json};

use crate::cmd::records::RecordType;
use crate::cmd::util::{OutputOptions, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long = "type")]
	pub type_name: String,
	#[arg(long)]
	pub input: PathBuf,
	#[arg(long, value_delimiter = ',')]
	pub attrs: Option<Vec<String>>,
	#[arg(long)]
	pub validate: bool,
	#[arg(long)]
	pub pretty: bool,
}

/// Assign a JSON attribute map onto a fresh record and print the exported result.
pub fn run(args: Args) -> fieldbridge::bridge::Result<()> {
	let Args {
		type_name,
		input,
		attrs,
		validate,
		pretty,
	} = args;

	let record = RecordType::parse(&type_name)?;
	let text = std::fs::read_to_string(&input)?;
	let json: serde_json::Value = serde_json::from_str(&text)?;
	let source = map_from_json(json, &input.display().to_string())?;
	tracing::debug!(record = record.type_name(), keys = source.len(), "loaded attribute source");

	let exported = record.assign_fresh(attrs.as_deref(), &source, validate)?;
	emit_json(&map_to_json(&exported), OutputOptions::from_flag(pretty))
}
