use std::fmt;

/// A token's position in the source text.
///
/// Line and column are 1-based, the byte offset is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// The 1-based line number.
    pub line: usize,
    /// The 1-based column number, in characters.
    pub column: usize,
    /// The 0-based byte offset from the start of the input.
    pub offset: usize,
}

impl Default for Location {
    fn default() -> Self {
        Location {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The kind of a token.
///
/// A closed set: the grammar has no identifiers or keywords, only
/// numeric literals, the four arithmetic operators, parentheses and
/// whitespace. `Eof` never comes out of the lexer; the parser
/// synthesizes it when the token stream is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Floating-point literal: one digit, a dot, one or more digits.
    Float,
    /// Integer literal: one or more digits.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// A run of whitespace characters.
    Whitespace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// Synthetic end-of-input marker.
    Eof,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Float => "float literal",
            TokenType::Integer => "integer literal",
            TokenType::Plus => "'+'",
            TokenType::Minus => "'-'",
            TokenType::Whitespace => "whitespace",
            TokenType::LeftParen => "'('",
            TokenType::RightParen => "')'",
            TokenType::Star => "'*'",
            TokenType::Slash => "'/'",
            TokenType::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// A token: its kind, original source text and location.
///
/// Tokens are immutable; the lexer creates them and the parser
/// consumes each exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of the token.
    pub token_type: TokenType,
    /// The source text the token was matched from.
    pub lexeme: String,
    /// Where in the input the token starts.
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Creates the synthetic end-of-input token at `location`.
    pub fn eof(location: Location) -> Self {
        Self::new(TokenType::Eof, "", location)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.token_type, self.location)
    }
}
