#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "fieldbridge", about = "Record attribute bridging tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Fields(cmd::fields::Args),
	Defaults(cmd::defaults::Args),
	Assign(cmd::assign::Args),
	Color {
		hex: String,
	},
	PathStyle {
		path: String,
	},
	UrlHash {
		url: String,
	},
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run() -> fieldbridge::bridge::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Fields(args) => cmd::fields::run(args),
		Commands::Defaults(args) => cmd::defaults::run(args),
		Commands::Assign(args) => cmd::assign::run(args),
		Commands::Color { hex } => cmd::helpers::color(&hex),
		Commands::PathStyle { path } => cmd::helpers::path_style(&path),
		Commands::UrlHash { url } => cmd::helpers::url_hash(&url),
	}
}
