use fieldbridge::bridge::{detect_path_style, hash_url, parse_hex_color};

use crate::cmd::util::{OutputOptions, emit_json};

/// Parse a hex color and print its channels as JSON.
pub fn color(input: &str) -> fieldbridge::bridge::Result<()> {
	let rgba = parse_hex_color(input)?;
	let payload = ColorJson {
		r: rgba.r,
		g: rgba.g,
		b: rgba.b,
		a: rgba.a,
		hex: rgba.to_hex(),
	};
	emit_json(&payload, OutputOptions::default())
}

/// Print the detected style label and separator of a path string.
pub fn path_style(path: &str) -> fieldbridge::bridge::Result<()> {
	let style = detect_path_style(path);
	println!("{}\t{}", style.as_str(), style.separator());
	Ok(())
}

/// Print the SHA-256 hex digest of a URL.
pub fn url_hash(url: &str) -> fieldbridge::bridge::Result<()> {
	println!("{}", hash_url(url));
	Ok(())
}

#[derive(serde::Serialize)]
struct ColorJson {
	r: u8,
	g: u8,
	b: u8,
	a: u8,
	hex: String,
}
