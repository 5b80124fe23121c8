mod app;
mod cli;
mod color;
mod event;
mod scanner;
mod settings;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let settings_path = settings::default_settings_path();
    let settings = settings::load(&settings_path)?;
    let cli_opts = cli::Cli::parse();
    if let Some(command) = cli_opts.command {
        return cli::run(command, &settings, &settings_path);
    }

    let Some(file) = cli_opts.file else {
        println!("Usage: pillbox <file>  (see `pillbox --help` for subcommands)");
        return Ok(());
    };

    let mut app = app::App::new(settings, settings_path, file)?;
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
