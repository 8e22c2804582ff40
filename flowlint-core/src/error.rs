use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The flow document could not be read or parsed at all. This is the
    /// only condition that aborts a lint run; structural defects inside a
    /// well-formed document are collected as issues instead.
    #[error("decode error: {0}")]
    Decode(String),
}
