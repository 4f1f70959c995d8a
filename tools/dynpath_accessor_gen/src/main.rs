//! Offline generator for the named typed accessors in `dynpath`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use dynpath::map::Kind;
use tracing_subscriber::EnvFilter;

mod render;

use render::{TEMPLATES, Template, render};

/// Generated accessor directory relative to the workspace root.
const ACCESSOR_DIR: &str = "src/map/accessors";

type DynError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser, Debug)]
#[command(name = "dynpath_accessor_gen")]
#[command(about = "Render the typed scalar and sequence accessors for every primitive kind")]
struct Args {
	/// Workspace root containing `src/map/accessors`.
	#[arg(long, default_value = ".")]
	root: PathBuf,
	/// Fail instead of writing when checked-in accessors are stale.
	#[arg(long)]
	check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOutcome {
	Written,
	Unchanged,
	Stale,
}

fn main() {
	init_tracing();

	if let Err(err) = run(Args::parse()) {
		tracing::error!("{err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

fn run(args: Args) -> Result<(), DynError> {
	let out_dir = args.root.join(ACCESSOR_DIR);
	if !out_dir.is_dir() {
		return Err(format!("accessor directory {} not found; pass --root <workspace>", out_dir.display()).into());
	}

	let mut stale = Vec::new();
	for template in &TEMPLATES {
		let path = out_dir.join(template.output);
		let outcome = sync_file(template, &path, args.check)?;
		tracing::info!(template = template.name, path = %path.display(), kinds = Kind::ALL.len(), ?outcome, "accessors");
		if outcome == FileOutcome::Stale {
			stale.push(path);
		}
	}

	if !stale.is_empty() {
		let names: Vec<String> = stale.iter().map(|path| path.display().to_string()).collect();
		return Err(format!("stale generated accessors: {}", names.join(", ")).into());
	}

	Ok(())
}

fn sync_file(template: &Template, path: &Path, check: bool) -> Result<FileOutcome, DynError> {
	let rendered = render(template, &Kind::ALL)?;
	let current = fs::read_to_string(path).ok();

	if current.as_deref() == Some(rendered.as_str()) {
		return Ok(FileOutcome::Unchanged);
	}
	if check {
		return Ok(FileOutcome::Stale);
	}

	fs::write(path, rendered)?;
	Ok(FileOutcome::Written)
}

#[cfg(test)]
mod tests;
