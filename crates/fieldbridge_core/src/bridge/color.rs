use std::fmt;

use crate::bridge::{BridgeError, Result};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha channel, `0xff` is opaque.
	pub a: u8,
}

impl Rgba {
	/// Render as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
	pub fn to_hex(&self) -> String {
		if self.a == 0xff {
			format!("#{}", hex::encode([self.r, self.g, self.b]))
		} else {
			format!("#{}", hex::encode([self.r, self.g, self.b, self.a]))
		}
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
pub fn parse_hex_color(input: &str) -> Result<Rgba> {
	let invalid = || BridgeError::InvalidColor { input: input.to_owned() };

	let trimmed = input.trim();
	let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
	let expanded = match digits.len() {
		3 | 4 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
		6 | 8 => digits.to_owned(),
		_ => return Err(invalid()),
	};

	let bytes = hex::decode(&expanded).map_err(|_| invalid())?;
	match bytes.as_slice() {
		[r, g, b] => Ok(Rgba { r: *r, g: *g, b: *b, a: 0xff }),
		[r, g, b, a] => Ok(Rgba { r: *r, g: *g, b: *b, a: *a }),
		_ => Err(invalid()),
	}
}

#[cfg(test)]
mod tests {
	use super::{Rgba, parse_hex_color};

	#[test]
	fn long_form_parses_with_and_without_hash() {
		let expected = Rgba { r: 0xff, g: 0x88, b: 0x00, a: 0xff };
		assert_eq!(parse_hex_color("#FF8800").expect("color parses"), expected);
		assert_eq!(parse_hex_color("ff8800").expect("color parses"), expected);
	}

	#[test]
	fn short_form_duplicates_digits() {
		let color = parse_hex_color("#f80c").expect("color parses");
		assert_eq!(color, Rgba { r: 0xff, g: 0x88, b: 0x00, a: 0xcc });
	}

	#[test]
	fn alpha_only_rendered_when_translucent() {
		assert_eq!(parse_hex_color("#102030").expect("color parses").to_hex(), "#102030");
		assert_eq!(parse_hex_color("#10203080").expect("color parses").to_string(), "#10203080");
	}

	#[test]
	fn malformed_input_is_rejected() {
		for input in ["", "#", "#12", "#12345", "#gggggg", "#1234567890", "#éé"] {
			let err = parse_hex_color(input).expect_err("color should be rejected");
			assert_eq!(err.kind(), crate::bridge::ErrorKind::InvalidColor, "input {input:?}");
		}
	}
}
