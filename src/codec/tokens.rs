use crate::codebook::{ESCAPE_BYTE, ESCAPE_RUN, MAX_RUN_LEN};
use crate::error::{Error, Result};

/// A single unit of the compressed stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A codebook code (0-253)
    Code(u8),
    /// One verbatim byte (escape 254)
    Literal(u8),
    /// A verbatim run of 0-255 bytes (escape 255)
    Run(&'a [u8]),
}

impl<'a> Token<'a> {
    /// Number of bytes this token occupies in the compressed stream
    pub fn encoded_len(&self) -> usize {
        match self {
            Token::Code(_) => 1,
            Token::Literal(_) => 2,
            Token::Run(bytes) => 2 + bytes.len(),
        }
    }

    /// Append the wire encoding of this token
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.reserve(self.encoded_len());
        match *self {
            Token::Code(code) => out.push(code),
            Token::Literal(byte) => out.extend_from_slice(&[ESCAPE_BYTE, byte]),
            Token::Run(bytes) => {
                debug_assert!(bytes.len() <= MAX_RUN_LEN);
                out.push(ESCAPE_RUN);
                out.push(bytes.len() as u8);
                out.extend_from_slice(bytes);
            }
        }
    }
}

/// Parses a compressed stream into tokens
///
/// Yields `(offset, token)` pairs. Escape framing is bounds-checked here;
/// whether a code indexes the codebook is left to the decoder. After the
/// first error the reader yields nothing more.
pub struct TokenReader<'a> {
    data: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> TokenReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0, failed: false }
    }

    /// Current byte offset into the stream
    pub fn position(&self) -> usize {
        self.pos
    }

    fn read_token(&mut self) -> Result<Token<'a>> {
        let offset = self.pos;
        let rest = &self.data[offset..];

        match rest[0] {
            ESCAPE_BYTE => {
                let byte = *rest.get(1).ok_or(Error::TruncatedEscape { offset })?;
                self.pos += 2;
                Ok(Token::Literal(byte))
            }
            ESCAPE_RUN => {
                let declared = *rest.get(1).ok_or(Error::TruncatedEscape { offset })? as usize;
                let payload = &rest[2..];
                if payload.len() < declared {
                    return Err(Error::TruncatedVerbatimPayload {
                        offset,
                        declared,
                        available: payload.len(),
                    });
                }
                self.pos += 2 + declared;
                Ok(Token::Run(&payload[..declared]))
            }
            code => {
                self.pos += 1;
                Ok(Token::Code(code))
            }
        }
    }
}

impl<'a> Iterator for TokenReader<'a> {
    type Item = Result<(usize, Token<'a>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.data.len() {
            return None;
        }

        let offset = self.pos;
        match self.read_token() {
            Ok(token) => Some(Ok((offset, token))),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for TokenReader<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(data: &[u8]) -> Vec<Result<(usize, Token<'_>)>> {
        TokenReader::new(data).collect()
    }

    #[test]
    fn test_write_tokens() {
        let mut out = Vec::new();
        Token::Code(1).write_to(&mut out);
        Token::Literal(b'Q').write_to(&mut out);
        Token::Run(b"QZ").write_to(&mut out);
        assert_eq!(out, vec![1, 254, b'Q', 255, 2, b'Q', b'Z']);
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(Token::Code(0).encoded_len(), 1);
        assert_eq!(Token::Literal(0).encoded_len(), 2);
        assert_eq!(Token::Run(&[0; 10]).encoded_len(), 12);
        assert_eq!(Token::Run(&[]).encoded_len(), 2);
    }

    #[test]
    fn test_read_mixed_stream() {
        let data = [1, 254, b'Q', 255, 2, b'Q', b'Z', 0];
        let tokens: Vec<_> = collect(&data).into_iter().map(|t| t.unwrap()).collect();
        assert_eq!(
            tokens,
            vec![
                (0, Token::Code(1)),
                (1, Token::Literal(b'Q')),
                (3, Token::Run(b"QZ")),
                (7, Token::Code(0)),
            ]
        );
    }

    #[test]
    fn test_zero_length_run() {
        let tokens: Vec<_> = collect(&[255, 0]).into_iter().map(|t| t.unwrap()).collect();
        assert_eq!(tokens, vec![(0, Token::Run(&[]))]);
    }

    #[test]
    fn test_truncated_single_escape() {
        let results = collect(&[1, 254]);
        assert_eq!(results.len(), 2);
        assert!(matches!(results[1], Err(Error::TruncatedEscape { offset: 1 })));
    }

    #[test]
    fn test_truncated_run_length() {
        let results = collect(&[255]);
        assert!(matches!(results[0], Err(Error::TruncatedEscape { offset: 0 })));
    }

    #[test]
    fn test_truncated_run_payload() {
        let results = collect(&[255, 5, 0x41, 0x42]);
        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0],
            Err(Error::TruncatedVerbatimPayload { offset: 0, declared: 5, available: 2 })
        ));
    }

    #[test]
    fn test_position_tracks_consumed_bytes() {
        let mut reader = TokenReader::new(&[1, 255, 2, b'x', b'y', 254, b'z']);
        assert_eq!(reader.position(), 0);
        reader.next().unwrap().unwrap();
        assert_eq!(reader.position(), 1);
        reader.next().unwrap().unwrap();
        assert_eq!(reader.position(), 5);
        reader.next().unwrap().unwrap();
        assert_eq!(reader.position(), 7);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_written_size_matches_encoded_len() {
        let tokens = [Token::Code(7), Token::Literal(b'!'), Token::Run(b"12345"), Token::Run(&[])];
        for token in tokens {
            let mut out = Vec::new();
            token.write_to(&mut out);
            assert_eq!(out.len(), token.encoded_len());
        }
    }

    #[test]
    fn test_stops_after_error() {
        let mut reader = TokenReader::new(&[254]);
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_empty_stream() {
        assert!(collect(&[]).is_empty());
    }
}
