//! File-backed logging for the interactive session.
//!
//! The terminal belongs to ratatui while the host runs, so log output goes to
//! a file in the application data directory instead of stdout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::app_dirs;

/// Default log file location inside the application data directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join("progress-circle.log"))
}

/// Install the global logger writing to `file` at `level`.
pub fn initialize(level: LevelFilter, file: &Path) -> Result<()> {
	if let Some(parent) = file.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!(
				"{}[{}][{}] {}",
				chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
				record.target(),
				record.level(),
				message
			))
		})
		.level(level)
		.chain(fern::log_file(file).with_context(|| {
			format!("failed to open log file {}", file.display())
		})?)
		.apply()
		.context("failed to install logger")?;
	Ok(())
}
