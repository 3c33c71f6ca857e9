use crate::args::{Cli, Commands, ConfigCommand};
use crate::config::{Config, resolve_config_path};
use crate::handlers;
use anyhow::Result;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&config_path);
        return Ok(());
    };

    match command {
        Commands::Analyze { text, file } => {
            let config = Config::load_from(&config_path)?;
            let format = cli.format.unwrap_or(config.output.format);

            handlers::analyze::handle(text, file.as_deref(), format)
        }

        Commands::Summarize {
            text,
            file,
            max_chars,
        } => {
            let config = Config::load_from(&config_path)?;
            let format = cli.format.unwrap_or(config.output.format);
            let max_chars = max_chars
                .map(|n| n as usize)
                .unwrap_or(config.summary.max_chars);

            handlers::summarize::handle(text, file.as_deref(), max_chars, format)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&config_path, cli.format),
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
        },
    }
}

fn show_guidance(config_path: &Path) {
    println!("textgauge - Text statistics and ticket summaries\n");

    println!("Quick commands:");
    println!("  textgauge analyze \"Some text.\"     # Count characters, words, sentences");
    println!("  textgauge summarize --file TICKET  # Cut ticket text down to size");
    println!("  echo text | textgauge analyze      # Read from stdin\n");

    if !config_path.exists() {
        println!("No configuration file yet:");
        println!("  textgauge config init              # Write a default config file\n");
    }

    println!("For more commands:");
    println!("  textgauge --help");
}
