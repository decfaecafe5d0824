use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Index {index} is out of range for {len} words")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Seed unavailable: {0}")]
    Seed(String),
}

impl From<std::io::Error> for VocabError {
    fn from(error: std::io::Error) -> Self {
        VocabError::Io(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, VocabError>;
