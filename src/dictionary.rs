use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the data dictionary, matching the schema the model is asked
/// to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response is not a JSON array of dictionary entries: {0}")]
    Json(#[from] serde_json::Error),
}

/// Strict parse of the model's reply. Succeeds fully or not at all; a reply
/// that is not valid JSON, not an array, or missing any required field
/// produces no partial table.
pub fn parse_dictionary(text: &str) -> Result<Vec<DictionaryEntry>, ParseError> {
    let entries: Vec<DictionaryEntry> = serde_json::from_str(text)?;
    Ok(entries)
}

/// Renders the dictionary as a plain-text table, one row per entry, in
/// response order.
pub fn render_table(entries: &[DictionaryEntry]) -> String {
    let name_width = column_width("Name", entries.iter().map(|e| e.name.as_str()));
    let type_width = column_width("Type", entries.iter().map(|e| e.data_type.as_str()));

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:<type_width$}  {}\n",
        "Name", "Type", "Description"
    ));
    out.push_str(&format!(
        "{:<name_width$}  {:<type_width$}  {}\n",
        "-".repeat(name_width),
        "-".repeat(type_width),
        "-".repeat("Description".len())
    ));
    for entry in entries {
        out.push_str(&format!(
            "{:<name_width$}  {:<type_width$}  {}\n",
            entry.name, entry.data_type, entry.description
        ));
    }
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
