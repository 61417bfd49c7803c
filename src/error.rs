use thiserror::Error;

/// Errors that can occur while looking up a recipe
#[derive(Error, Debug)]
pub enum QuestError {
    /// No ingredients were entered
    #[error("No ingredients entered!")]
    EmptyInput,

    /// The API answered with a non-success status
    #[error("Error while making request to server (HTTP code: {0})")]
    HttpStatus(u16),

    /// The API answered with an empty body
    #[error("No response body from HTTP request")]
    EmptyBody,

    /// The request could not be sent or the body could not be read
    #[error("Failed to reach server: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON
    #[error("JSON decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response decoded, but not into the expected shape
    #[error("Unexpected format of {0}")]
    UnexpectedShape(&'static str),

    /// A required field is absent from an otherwise valid response
    #[error("Missing required field `{0}` in response")]
    MissingField(&'static str),

    /// No API key in configuration or environment
    #[error("API key not found: set `api_key` in config.toml, RECIPE_QUEST__API_KEY or FOOD2FORK_API_KEY")]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Console read or write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
