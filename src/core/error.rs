use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PushgateError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Config error in {path}: {message}")]
    ConfigError { path: String, message: String },
    #[error("Hook error: {0}")]
    HookError(String),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Path error: {0}")]
    PathError(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
