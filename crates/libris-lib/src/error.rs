use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("{0}")]
    Server(String),
    #[error("payment failed: {0}")]
    Payment(String),
    #[error("invalid page config: {0}")]
    Config(String),
}
