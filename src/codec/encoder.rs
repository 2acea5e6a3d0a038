use super::tokens::Token;
use super::CompressionStats;
use crate::codebook::{Codebook, MAX_PATTERN_LEN, MAX_RUN_LEN};

/// Greedy longest-match encoder
///
/// At each position the longest prefix (up to 7 bytes) found in the
/// codebook is emitted as its code. Bytes with no match are collected
/// into a pending run and written with the escape framing:
///
/// - 1 byte: `254, byte`
/// - 2-255 bytes: `255, len, bytes...`
///
/// Runs are flushed as soon as they reach 255 bytes, before any code is
/// emitted, and at end of input.
#[derive(Clone, Copy, Debug)]
pub struct Encoder<'c> {
    codebook: &'c Codebook,
}

impl Default for Encoder<'static> {
    fn default() -> Self {
        Self::new(Codebook::standard())
    }
}

impl<'c> Encoder<'c> {
    pub fn new(codebook: &'c Codebook) -> Self {
        Self { codebook }
    }

    /// Compress `input` into a new buffer
    pub fn compress(&self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len() / 2 + 2);
        self.compress_into(input, &mut out);
        out
    }

    /// Compress `input`, appending to `out`
    pub fn compress_into(&self, input: &[u8], out: &mut Vec<u8>) -> CompressionStats {
        let start_len = out.len();
        let mut stats = CompressionStats { input_bytes: input.len() as u64, ..Default::default() };

        let max_len = self.codebook.max_pattern_len().min(MAX_PATTERN_LEN);
        // Pending verbatim run is input[run_start..pos]
        let mut run_start = 0;
        let mut pos = 0;

        while pos < input.len() {
            match self.longest_match(&input[pos..], max_len) {
                Some((code, len)) => {
                    flush_run(&input[run_start..pos], out, &mut stats);
                    Token::Code(code).write_to(out);
                    stats.code_tokens += 1;
                    pos += len;
                    run_start = pos;
                }
                None => {
                    pos += 1;
                    if pos - run_start == MAX_RUN_LEN {
                        flush_run(&input[run_start..pos], out, &mut stats);
                        run_start = pos;
                    }
                }
            }
        }
        flush_run(&input[run_start..pos], out, &mut stats);

        stats.output_bytes = (out.len() - start_len) as u64;
        tracing::trace!(
            input_bytes = stats.input_bytes,
            output_bytes = stats.output_bytes,
            "compressed"
        );
        stats
    }

    /// Longest codebook prefix of `rest`, as `(code, length)`
    #[inline]
    fn longest_match(&self, rest: &[u8], max_len: usize) -> Option<(u8, usize)> {
        let limit = max_len.min(rest.len());
        (1..=limit).rev().find_map(|len| self.codebook.lookup_code(&rest[..len]).map(|c| (c, len)))
    }
}

/// Write a pending verbatim run
fn flush_run(run: &[u8], out: &mut Vec<u8>, stats: &mut CompressionStats) {
    match run.len() {
        0 => {}
        1 => {
            Token::Literal(run[0]).write_to(out);
            stats.escape_tokens += 1;
        }
        _ => {
            for chunk in run.chunks(MAX_RUN_LEN) {
                Token::Run(chunk).write_to(out);
                stats.escape_tokens += 1;
            }
        }
    }
    stats.verbatim_bytes += run.len() as u64;
}
