use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    GenericRequest(String),
    #[error("client error ({status}): {message}")]
    ClientRequest { status: u16, message: String },
    #[error("server error ({0})")]
    ServerRequest(u16),
    #[error("json parse error: {0}")]
    JsonParse(String),
    #[error("upstream error {code}: {description}")]
    Api { code: String, description: String },
    #[error("no quote data returned for {0}")]
    SymbolNotFound(String),
}
