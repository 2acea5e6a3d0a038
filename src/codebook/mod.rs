pub mod table;

pub use table::*;

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

static STANDARD: OnceLock<Codebook> = OnceLock::new();

/// Ordered pattern table plus its reverse index
///
/// A pattern's code is its position in the table. The reverse index is
/// filled in ascending code order, so when a pattern appears twice the
/// higher code wins.
#[derive(Clone, Debug)]
pub struct Codebook {
    /// Patterns indexed by code
    patterns: Vec<Vec<u8>>,
    /// Pattern -> code
    index: HashMap<Vec<u8>, u8>,
    /// Length of the longest pattern (bounds the encoder's match search)
    max_pattern_len: usize,
}

impl Codebook {
    /// The process-wide standard codebook, built on first use
    pub fn standard() -> &'static Codebook {
        STANDARD.get_or_init(|| {
            Self::build(STANDARD_PATTERNS.iter().map(|p| p.to_vec()).collect())
        })
    }

    /// Build a codebook from an ordered list of patterns
    ///
    /// At most 254 patterns are allowed (codes 254 and 255 are escapes) and
    /// every pattern must be 1-7 bytes long.
    pub fn from_patterns<P: AsRef<[u8]>>(patterns: &[P]) -> Result<Self> {
        if patterns.len() > MAX_CODES {
            return Err(Error::CodebookTooLarge { len: patterns.len(), max: MAX_CODES });
        }

        for (code, pattern) in patterns.iter().enumerate() {
            let len = pattern.as_ref().len();
            if len == 0 || len > MAX_PATTERN_LEN {
                return Err(Error::InvalidPattern { code, len });
            }
        }

        Ok(Self::build(patterns.iter().map(|p| p.as_ref().to_vec()).collect()))
    }

    fn build(patterns: Vec<Vec<u8>>) -> Self {
        let mut index = HashMap::with_capacity(patterns.len());
        for (code, pattern) in patterns.iter().enumerate() {
            // Later entries overwrite earlier ones
            index.insert(pattern.clone(), code as u8);
        }
        let max_pattern_len = patterns.iter().map(Vec::len).max().unwrap_or(0);

        Self { patterns, index, max_pattern_len }
    }

    /// Code for an exact pattern, if the codebook has one
    #[inline]
    pub fn lookup_code(&self, pattern: &[u8]) -> Option<u8> {
        self.index.get(pattern).copied()
    }

    /// Pattern for a code
    ///
    /// Escape codes are not table entries; callers must handle 254/255 first.
    #[inline]
    pub fn lookup_pattern(&self, code: u8) -> Result<&[u8]> {
        self.patterns.get(code as usize).map(Vec::as_slice).ok_or(Error::InvalidCode(code))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn max_pattern_len(&self) -> usize {
        self.max_pattern_len
    }

    /// Iterate over `(code, pattern)` in code order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> {
        self.patterns.iter().enumerate().map(|(code, p)| (code as u8, p.as_slice()))
    }
}
