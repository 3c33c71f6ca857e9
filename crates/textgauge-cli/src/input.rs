use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Resolve the text to operate on: an explicit argument wins, then --file,
/// then stdin read to end. Giving both an argument and --file is rejected.
pub fn resolve_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => {
            anyhow::bail!("Cannot give both TEXT and --file; pick one input source")
        }
        (Some(text), None) => Ok(text),
        (None, Some(path)) => {
            if !path.exists() {
                anyhow::bail!("File not found: {}", path.display());
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))
        }
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer)
        }
    }
}
