use thiserror::Error;

#[derive(Error, Debug)]
pub enum DitdahError {
    #[error("invalid translation target: {0}")]
    InvalidTarget(String),

    #[error("too many arguments")]
    TooManyArguments,

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DitdahError>;
