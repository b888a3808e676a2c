use std::path::Path;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::dictionary::{parse_dictionary, DictionaryEntry};
use crate::errors::{AppError, InputError};
use crate::header::read_header;
use crate::llm_client::GeminiClient;
use crate::prompt::build_prompt;

/// One full request cycle: detect columns, check the credential, ask the
/// model, parse its reply. The credential check happens before a client is
/// even constructed, so a missing key never causes network traffic.
pub async fn generate_dictionary(
    cfg: &AppConfig,
    file: &Path,
) -> Result<Vec<DictionaryEntry>, AppError> {
    let columns = read_header(file)?;
    info!(
        "detected columns: {} ({} columns found)",
        columns.join(", "),
        columns.len()
    );

    if cfg.api_key.is_empty() {
        return Err(InputError::MissingApiKey.into());
    }

    let prompt = build_prompt(&columns);
    let client = GeminiClient::new(cfg.endpoint.clone(), cfg.model.clone(), cfg.api_key.clone());

    info!("asking {} to describe {} columns", cfg.model, columns.len());
    let reply = client.generate(&prompt).await?;
    let entries = parse_dictionary(&reply)?;

    // The service is trusted to answer one entry per column; correspondence
    // is logged but deliberately not enforced.
    if entries.len() != columns.len() {
        warn!(
            "model returned {} entries for {} columns",
            entries.len(),
            columns.len()
        );
    }

    Ok(entries)
}
