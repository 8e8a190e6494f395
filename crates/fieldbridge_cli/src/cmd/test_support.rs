use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use fieldbridge_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static FIELDBRIDGE_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn run_fieldbridge(args: &[&str]) -> Output {
	Command::new(fieldbridge_bin())
		.args(args)
		.output()
		.expect("fieldbridge command executes")
}

pub(crate) fn run_fieldbridge_json(args: &[&str]) -> serde_json::Value {
	let output = run_fieldbridge(args);
	assert!(
		output.status.success(),
		"fieldbridge command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fieldbridge_bin() -> &'static PathBuf {
	FIELDBRIDGE_BIN.get_or_init(resolve_fieldbridge_bin)
}

fn resolve_fieldbridge_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_fieldbridge") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let mut bin = workspace_target_dir().join("debug");
	bin.push(if cfg!(windows) { "fieldbridge.exe" } else { "fieldbridge" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "fieldbridge"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build fieldbridge binary at {}", bin.display());

	bin
}
