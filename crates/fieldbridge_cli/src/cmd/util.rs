use serde::Serialize;

/// Output rendering options shared by JSON-emitting commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
	/// Indent JSON output.
	pub pretty: bool,
}

impl OutputOptions {
	/// Indented output for interactive use.
	pub fn human() -> Self {
		Self { pretty: true }
	}

	/// Options from the `--pretty` flag.
	pub fn from_flag(pretty: bool) -> Self {
		if pretty { Self::human() } else { Self::default() }
	}
}

/// Render `payload` as JSON text.
pub(crate) fn render_json<T: Serialize + ?Sized>(payload: &T, options: OutputOptions) -> fieldbridge::bridge::Result<String> {
	let text = if options.pretty {
		serde_json::to_string_pretty(payload)?
	} else {
		serde_json::to_string(payload)?
	};
	Ok(text)
}

/// Print `payload` as one JSON document on stdout.
pub(crate) fn emit_json<T: Serialize + ?Sized>(payload: &T, options: OutputOptions) -> fieldbridge::bridge::Result<()> {
	println!("{}", render_json(payload, options)?);
	Ok(())
}
