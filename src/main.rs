mod app;
mod cli;
mod color;
mod event;
mod ramp;
mod session;
mod swatch;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    if let Some(command) = cli_opts.command {
        return cli::run(command);
    }

    let session_path = session::default_session_path();
    let seed = if cli_opts.colors.is_empty() {
        session::load(&session_path)
    } else {
        Some(cli_opts.colors.join(" "))
    };

    let mut app = app::App::new(session_path, seed);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
