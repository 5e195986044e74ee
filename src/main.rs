mod app;
mod cli;
mod feed;
mod settings;

use anyhow::Result;
use cli::parse_cli;

use progress_circle::logging;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize(resolved.log_level, &resolved.log_file)?;
	log::info!("starting progress-circle host");

	let mut app = app::App::new(resolved)?;
	app.run()
}
