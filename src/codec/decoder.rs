use super::tokens::{Token, TokenReader};
use super::CompressionStats;
use crate::codebook::Codebook;
use crate::error::Result;

/// Decoder for the smaz token stream
///
/// A stream is accepted only if it ends exactly on a token boundary and
/// every code indexes the codebook. Malformed input is rejected whole.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'c> {
    codebook: &'c Codebook,
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new(Codebook::standard())
    }
}

impl<'c> Decoder<'c> {
    pub fn new(codebook: &'c Codebook) -> Self {
        Self { codebook }
    }

    /// Decompress `input` into a new buffer
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(input.len() * 2);
        self.decompress_into(input, &mut out)?;
        Ok(out)
    }

    /// Decompress `input`, appending to `out`
    ///
    /// On error `out` is truncated back to its original length.
    pub fn decompress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<CompressionStats> {
        let start_len = out.len();
        match self.decode_tokens(input, out) {
            Ok(mut stats) => {
                stats.output_bytes = (out.len() - start_len) as u64;
                tracing::trace!(
                    input_bytes = stats.input_bytes,
                    output_bytes = stats.output_bytes,
                    "decompressed"
                );
                Ok(stats)
            }
            Err(e) => {
                out.truncate(start_len);
                tracing::debug!(error = %e, input_bytes = input.len(), "rejected compressed stream");
                Err(e)
            }
        }
    }

    fn decode_tokens(&self, input: &[u8], out: &mut Vec<u8>) -> Result<CompressionStats> {
        let mut stats = CompressionStats { input_bytes: input.len() as u64, ..Default::default() };

        for token in TokenReader::new(input) {
            let (_, token) = token?;
            match token {
                Token::Code(code) => {
                    out.extend_from_slice(self.codebook.lookup_pattern(code)?);
                    stats.code_tokens += 1;
                }
                Token::Literal(byte) => {
                    out.push(byte);
                    stats.escape_tokens += 1;
                    stats.verbatim_bytes += 1;
                }
                Token::Run(bytes) => {
                    out.extend_from_slice(bytes);
                    stats.escape_tokens += 1;
                    stats.verbatim_bytes += bytes.len() as u64;
                }
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn decompress(input: &[u8]) -> Result<Vec<u8>> {
        Decoder::default().decompress(input)
    }

    #[test]
    fn test_empty() {
        assert!(decompress(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_codes() {
        assert_eq!(decompress(&[1]).unwrap(), b"the");
        assert_eq!(decompress(&[67, 253]).unwrap(), b"http://.com");
        assert_eq!(decompress(&[13, 2]).unwrap(), b" the");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(decompress(&[254, b'Q']).unwrap(), b"Q");
        assert_eq!(decompress(&[255, 3, b'1', b'2', b'3', 1]).unwrap(), b"123the");
    }

    #[test]
    fn test_single_escape_of_escape_value() {
        // Literal payloads may hold any byte, including escape values
        assert_eq!(decompress(&[254, 255]).unwrap(), vec![255]);
        assert_eq!(decompress(&[255, 2, 254, 255]).unwrap(), vec![254, 255]);
    }

    #[test]
    fn test_zero_length_run() {
        assert!(decompress(&[255, 0]).unwrap().is_empty());
        assert_eq!(decompress(&[1, 255, 0, 1]).unwrap(), b"thethe");
    }

    #[test]
    fn test_truncated_escape() {
        assert!(matches!(decompress(&[254]), Err(Error::TruncatedEscape { offset: 0 })));
        assert!(matches!(decompress(&[255]), Err(Error::TruncatedEscape { offset: 0 })));
        assert!(matches!(decompress(&[1, 1, 254]), Err(Error::TruncatedEscape { offset: 2 })));
    }

    #[test]
    fn test_truncated_payload() {
        assert!(matches!(
            decompress(&[255, 5, 0x41, 0x42]),
            Err(Error::TruncatedVerbatimPayload { offset: 0, declared: 5, available: 2 })
        ));
    }

    #[test]
    fn test_invalid_code_with_short_codebook() {
        let codebook = Codebook::from_patterns(&["a", "b"]).unwrap();
        let decoder = Decoder::new(&codebook);
        assert_eq!(decoder.decompress(&[0, 1, 0]).unwrap(), b"aba");
        assert!(matches!(decoder.decompress(&[0, 2]), Err(Error::InvalidCode(2))));
    }

    #[test]
    fn test_error_leaves_buffer_untouched() {
        let mut out = b"keep".to_vec();
        let result = Decoder::default().decompress_into(&[1, 1, 255, 9, 0], &mut out);
        assert!(result.is_err());
        assert_eq!(out, b"keep");
    }

    #[test]
    fn test_stats() {
        let mut out = Vec::new();
        let input = [1, 254, b'Q', 255, 2, b'x', b'y'];
        let stats = Decoder::default().decompress_into(&input, &mut out).unwrap();
        assert_eq!(out, b"theQxy");
        assert_eq!(stats.input_bytes, 7);
        assert_eq!(stats.output_bytes, 6);
        assert_eq!(stats.code_tokens, 1);
        assert_eq!(stats.escape_tokens, 2);
        assert_eq!(stats.verbatim_bytes, 3);
    }
}
