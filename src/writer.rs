use crate::document::DiagramDocument;
use anyhow::Result;
use std::path::Path;

/// Serializes the document (2-space pretty JSON, as the editor saves it) to
/// a file, or stdout when no path is given.
pub fn write_document(document: &DiagramDocument, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
