use crate::input::resolve_text;
use crate::render;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::Path;
use textgauge_engine::analyze;

pub fn handle(text: Option<String>, file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let text = resolve_text(text, file)?;
    let report = analyze(&text);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Plain => {
            render::print_report(&report);
        }
    }

    Ok(())
}
