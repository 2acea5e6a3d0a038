use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Compressed stream errors
    #[error("Truncated escape at offset {offset}: missing byte after escape code")]
    TruncatedEscape { offset: usize },

    #[error(
        "Truncated verbatim run at offset {offset}: declared {declared} bytes, {available} available"
    )]
    TruncatedVerbatimPayload { offset: usize, declared: usize, available: usize },

    #[error("Invalid codebook code: {0}")]
    InvalidCode(u8),

    // Codebook construction errors
    #[error("Codebook has {len} entries, maximum is {max}")]
    CodebookTooLarge { len: usize, max: usize },

    #[error("Codebook pattern for code {code} has length {len} (must be 1-7)")]
    InvalidPattern { code: usize, len: usize },

    // Text conversion errors
    #[error("Decompressed data is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Whether this error means the compressed input itself is malformed
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::TruncatedEscape { .. }
                | Error::TruncatedVerbatimPayload { .. }
                | Error::InvalidCode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
