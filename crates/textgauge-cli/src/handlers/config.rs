use crate::config::Config;
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn show(config_path: &Path, format_override: Option<OutputFormat>) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let format = format_override.unwrap_or(config.output.format);
    let source = if config_path.exists() {
        "file"
    } else {
        "built-in defaults"
    };

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "path": config_path.display().to_string(),
                "source": source,
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => {
            let use_color = std::io::stdout().is_terminal();
            let header = |text: &str| {
                if use_color {
                    text.yellow().bold().to_string()
                } else {
                    text.to_string()
                }
            };

            println!("{}", header("Configuration:"));
            println!("  Path:            {}", config_path.display());
            println!("  Source:          {}", source);
            println!("  Output format:   {}", config.output.format);
            println!("  Summary budget:  {} chars", config.summary.max_chars);
        }
    }

    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;

    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}
