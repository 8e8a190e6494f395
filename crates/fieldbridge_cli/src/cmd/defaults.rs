use fieldbridge::bridge::{defaults, map_to_json};

use crate::cmd::records::RecordType;
use crate::cmd::util::{OutputOptions, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long = "type")]
	pub type_name: String,
	#[arg(long)]
	pub pretty: bool,
}

/// Print the zero-value attribute map of a record type.
pub fn run(args: Args) -> fieldbridge::bridge::Result<()> {
	let record = RecordType::parse(&args.type_name)?;
	let map = defaults(&record.kind())?;
	emit_json(&map_to_json(&map), OutputOptions::from_flag(args.pretty))
}
