use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonewordError {
    #[error("Cannot encode string [{word}] which contains unsupported character [{character}]")]
    UnknownCharacter { word: String, character: char },
    #[error("Failed to load the dictionary file - [{0}] doesn't exist")]
    DictionaryNotFound(String),
    #[error("Failed to load the input file - [{0}] doesn't exist")]
    InputNotFound(String),
    #[error("Missing argument [{0}]")]
    ArgumentMissing(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PhonewordError {
    /// True for errors the dictionary loader recovers from by skipping the word.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownCharacter { .. })
    }
}

pub type Result<T> = std::result::Result<T, PhonewordError>;
