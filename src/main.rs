// src/main.rs

//! `console`: prints its arguments with markup converted to ANSI escapes.

use anyhow::Context;
use clap::Parser;
use console_markup::{config::CONFIG, cursor, markup, ConvertOptions};
use log::debug;
use std::io::{self, Write};

const USAGE: &str = "Usage\n\nconsole \"text to print\"\n";

/// Command-line definition.
#[derive(Parser, Debug)]
#[command(
    name = "console",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
struct Cli {
    /// Echo every token to stderr before it is resolved
    #[arg(short = 'd', long, alias = "markup-debug")]
    diagnostics: bool,

    /// Clear the screen before printing
    #[arg(long)]
    clear: bool,

    /// String placed between the text arguments
    #[arg(long, value_name = "SEP")]
    separator: Option<String>,

    /// Text to print
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    if cli.text.is_empty() {
        writeln!(stdout, "{}", USAGE).context("Failed to write usage")?;
        return Ok(());
    }

    let config = &*CONFIG;
    let options = ConvertOptions {
        diagnostics: cli.diagnostics || config.diagnostics,
        ..ConvertOptions::from(config)
    };
    let separator = cli.separator.as_deref().unwrap_or(&config.separator);
    let input = cli.text.join(separator);
    debug!("converting {:?} with {:?}", input, options);

    if cli.clear || config.clear_screen {
        cursor::clear(&mut stdout).context("Failed to clear screen")?;
    }

    let output = markup::convert_with(&input, &options);
    writeln!(stdout, "{}", output).context("Failed to write output")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
