//! Lexing failures.

use thiserror::Error;

/// The input contains a character sequence that matches none of the
/// lexical patterns.
///
/// Carries the byte offset where matching stopped, the total input
/// length and the offending input, so callers can point at the bad
/// spot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tokenizer stopped at byte {position} of {length} in {input:?}")]
pub struct TokenizerError {
    /// Byte offset where lexing stopped.
    pub position: usize,
    /// Total length of the input, in bytes.
    pub length: usize,
    /// The input that failed to tokenize.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_the_stopping_position() {
        let err = TokenizerError {
            position: 4,
            length: 5,
            input: "2 + @".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "tokenizer stopped at byte 4 of 5 in \"2 + @\""
        );
    }
}
