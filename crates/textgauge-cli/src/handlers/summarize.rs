use crate::input::resolve_text;
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use textgauge_engine::summarize;

#[derive(Serialize)]
struct SummaryOutput {
    summary: String,
    truncated: bool,
}

pub fn handle(
    text: Option<String>,
    file: Option<&Path>,
    max_chars: usize,
    format: OutputFormat,
) -> Result<()> {
    let text = resolve_text(text, file)?;
    let truncated = text.chars().count() > max_chars;
    let summary = summarize(&text, max_chars);

    match format {
        OutputFormat::Json => {
            let output = SummaryOutput { summary, truncated };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", summary);
        }
    }

    Ok(())
}
