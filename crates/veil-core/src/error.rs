use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown entity kind: {0}")]
    UnknownEntityKind(String),

    #[error("Invalid redaction mode: {0} (expected \"on\" or \"off\")")]
    InvalidRedactionMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
