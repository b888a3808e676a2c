use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use data_dictionary::app::generate_dictionary;
use data_dictionary::config::load_config;
use data_dictionary::dictionary::render_table;
use data_dictionary::errors::{AppError, InputError};
use data_dictionary::logger;

#[derive(Parser)]
#[command(name = "data-dictionary", version)]
#[command(about = "Generate a data dictionary for a CSV file with the Gemini API")]
struct Cli {
    /// CSV file whose header row will be analyzed
    file: PathBuf,

    /// Gemini API key; falls back to GEMINI_API_KEY
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Model name, e.g. gemini-1.5-flash
    #[arg(short, long)]
    model: Option<String>,

    /// API endpoint override; falls back to GEMINI_ENDPOINT
    #[arg(long)]
    endpoint: Option<String>,

    /// Also write the dictionary as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = load_config(&cli.endpoint, &cli.model, &cli.api_key)?;
    let entries = generate_dictionary(&cfg, &cli.file).await?;

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| InputError::Output(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| InputError::Output(e.to_string()))?;
    }

    print!("{}", render_table(&entries));
    Ok(())
}

#[tokio::main]
async fn main() {
    logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        error!("{}", err);
        match err {
            AppError::Input(_) => eprintln!("Error: {err}"),
            AppError::Request(_) => {
                eprintln!("An error occurred: {err}");
                eprintln!("Please check your API key and the file format.");
            }
        }
        std::process::exit(1);
    }
}
