use thiserror::Error;

use bn_network::NetworkError;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        IoError::Parse { line, message: message.into() }
    }
}

pub type IoResult<T> = Result<T, IoError>;
