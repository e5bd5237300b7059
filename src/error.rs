use thiserror::Error;

/// Failures the crate cannot route around: the `ERROR` class from the
/// nginx vocabulary this crate is descended from. "Not TLS" and "need more
/// bytes" are not failures; see [`crate::preread::parser::Outcome`] and
/// [`crate::preread::controller::ControllerOutcome`] for those.
#[derive(Error, Debug)]
pub enum PrereadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PrereadError>;
