/// Error types for loading stock data
use thiserror::Error;

/// Why a stock load produced no data.
///
/// The dashboard treats every variant the same way (an empty list); the
/// distinction only exists for logging and for the CLI.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The response body is not valid JSON
    #[error("Failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body parsed but `success` was not `true`
    #[error("Server reported failure")]
    Unsuccessful,

    /// The body has no `stocks` array
    #[error("Response has no stocks array")]
    MissingStocks,

    /// An element of `stocks` is not a JSON object
    #[error("Stock entry {0} is not an object")]
    MalformedRecord(usize),
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
