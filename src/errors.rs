use thiserror::Error;

use crate::config::ConfigError;
use crate::dictionary::ParseError;
use crate::header::HeaderError;
use crate::llm_client::LlmError;

/// Every failure surfaces as one of two coarse kinds: the input was unusable
/// before any remote call, or the remote call / its reply went wrong.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Input(#[from] InputError),
    #[error("{0}")]
    Request(#[from] RequestError),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{0}")]
    Header(#[from] HeaderError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("no API key supplied; pass --api-key or set GEMINI_API_KEY")]
    MissingApiKey,
    #[error("failed to write output: {0}")]
    Output(String),
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{0}")]
    Llm(#[from] LlmError),
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl From<HeaderError> for AppError {
    fn from(err: HeaderError) -> Self {
        AppError::Input(InputError::Header(err))
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Input(InputError::Config(err))
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        AppError::Request(RequestError::Llm(err))
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::Request(RequestError::Parse(err))
    }
}
