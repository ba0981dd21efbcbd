//! Arith lexical analyzer.
//!
//! Converts expression text into a lazy stream of tokens for the
//! parser. Whitespace is emitted as a real token rather than skipped:
//! the grammar is whitespace-sensitive around unary minus.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::TokenizerError;
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenType};
