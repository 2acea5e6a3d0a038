pub mod decoder;
pub mod encoder;
pub mod tokens;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use tokens::{Token, TokenReader};

/// Statistics from a single compress or decompress call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompressionStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Codebook codes emitted or consumed
    pub code_tokens: u64,
    /// Escape tokens (254 and 255) emitted or consumed
    pub escape_tokens: u64,
    /// Bytes carried verbatim inside escape tokens
    pub verbatim_bytes: u64,
}

