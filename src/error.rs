use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutoScrollError {
    #[error("Input text is empty, nothing to scroll")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
