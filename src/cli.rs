/// CLI argument parsing and command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::color;
use crate::ramp::{self, RampMode};
use crate::swatch;

#[derive(Parser)]
#[command(
    name = "tintr",
    version,
    about = "Tintr - A terminal tints and shades generator",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Color values to seed the entry line, e.g. "501214 fff"
    pub colors: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print tint and shade rows without entering the interactive table
    Print {
        /// Text to scan for hex color values
        colors: Vec<String>,
        /// Use 10% steps (17 columns) instead of 20% (9 columns)
        #[arg(long)]
        extra: bool,
        /// Prefix printed values with '#'
        #[arg(long)]
        hashtag: bool,
    },
}

/// Execute a one-shot CLI command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Print {
            colors,
            extra,
            hashtag,
        } => handle_print(colors, extra, hashtag),
    }
}

fn handle_print(colors: Vec<String>, extra: bool, hashtag: bool) -> Result<()> {
    let text = colors.join(" ");
    let Some(parsed) = color::parse_colors(&text) else {
        println!("No valid color values found.");
        return Ok(());
    };

    let mode = if extra { RampMode::Extra } else { RampMode::Normal };
    let width = if hashtag { 7 } else { 6 };

    let header = swatch::headers(mode)
        .iter()
        .map(|label| format!("{label:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{header}");

    for base in &parsed {
        let sequence = ramp::display_sequence(base, mode);
        let row = swatch::value_row(&sequence)
            .into_iter()
            .map(|value| {
                if hashtag {
                    format!("#{value}")
                } else {
                    value
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("{row}");
    }
    Ok(())
}
