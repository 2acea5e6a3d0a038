pub mod codebook;
pub mod codec;
pub mod error;

pub use codebook::{Codebook, ESCAPE_BYTE, ESCAPE_RUN};
pub use codec::{CompressionStats, Decoder, Encoder, Token, TokenReader};
pub use error::{Error, Result};

use std::io::{Read, Write};

/// Compress bytes with the standard codebook
///
/// Never fails; empty input gives empty output.
pub fn compress(input: &[u8]) -> Vec<u8> {
    Encoder::default().compress(input)
}

/// Decompress bytes produced with the standard codebook
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    Decoder::default().decompress(input)
}

/// Compress the UTF-8 bytes of a string
pub fn compress_str(input: &str) -> Vec<u8> {
    compress(input.as_bytes())
}

/// Decompress and interpret the result as UTF-8
pub fn decompress_to_string(input: &[u8]) -> Result<String> {
    Ok(String::from_utf8(decompress(input)?)?)
}

/// Read all of `input`, compress it and write the result to `output`
///
/// The whole input is buffered; the format has no framing for partial
/// streams.
pub fn compress_stream<R: Read, W: Write>(mut input: R, mut output: W) -> Result<CompressionStats> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let mut compressed = Vec::with_capacity(data.len() / 2 + 2);
    let stats = Encoder::default().compress_into(&data, &mut compressed);

    output.write_all(&compressed)?;
    output.flush()?;
    Ok(stats)
}

/// Read all of `input`, decompress it and write the result to `output`
///
/// Nothing is written when the input is malformed.
pub fn decompress_stream<R: Read, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<CompressionStats> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let mut decompressed = Vec::with_capacity(data.len() * 2);
    let stats = Decoder::default().decompress_into(&data, &mut decompressed)?;

    output.write_all(&decompressed)?;
    output.flush()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_str_roundtrip() {
        let text = "The quick brown fox jumps over the lazy dog";
        let packed = compress_str(text);
        assert!(packed.len() < text.len());
        assert_eq!(decompress_to_string(&packed).unwrap(), text);
    }

    #[test]
    fn test_decompress_to_string_rejects_invalid_utf8() {
        let packed = compress(&[0xff, 0xfe]);
        assert!(matches!(decompress_to_string(&packed), Err(Error::InvalidUtf8(_))));
    }

    #[test]
    fn test_stream_roundtrip() {
        let text = b"this is a stream of text that was read from a file";

        let mut packed = Vec::new();
        let stats = compress_stream(Cursor::new(text), &mut packed).unwrap();
        assert_eq!(stats.input_bytes, text.len() as u64);
        assert_eq!(stats.output_bytes, packed.len() as u64);

        let mut unpacked = Vec::new();
        let stats = decompress_stream(Cursor::new(&packed), &mut unpacked).unwrap();
        assert_eq!(unpacked, text);
        assert_eq!(stats.output_bytes, text.len() as u64);
    }

    #[test]
    fn test_decompress_stream_writes_nothing_on_error() {
        let mut out = Vec::new();
        let result = decompress_stream(Cursor::new([1u8, 255, 5, 0x41]), &mut out);
        assert!(matches!(result, Err(Error::TruncatedVerbatimPayload { .. })));
        assert!(out.is_empty());
    }
}
