//! Raw token patterns for the `logos` lexer.

use logos::Logos;

/// Lexical patterns, in precedence order.
///
/// `Float` must outrank `Integer`: the integer pattern is a
/// prefix-compatible subset and would otherwise shadow it. The float
/// pattern is deliberately a single leading digit, so `12.5` lexes as
/// the integer `12` followed by unmatchable input at the dot.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogosToken {
    /// One digit, a dot, one or more digits.
    #[regex(r"[0-9]\.[0-9]+", priority = 3)]
    Float,

    /// One or more digits.
    #[regex(r"[0-9]+", priority = 2)]
    Integer,

    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// A run of whitespace. Emitted as a token, never skipped: the
    /// parser must see it to reject a space after a unary minus.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// `(`
    #[token("(")]
    LeftParen,

    /// `)`
    #[token(")")]
    RightParen,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,
}
