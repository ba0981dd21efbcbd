//! A lazy, pull-based lexer over a borrowed source string.

use log::trace;
use logos::{Lexer as LogosLexer, Logos};

use crate::error::TokenizerError;
use crate::logos_token::LogosToken;
use crate::token::{Location, Token, TokenType};

/// A lazy lexer that produces tokens one at a time as the parser
/// pulls them; the full token list is never materialized.
///
/// The sequence is finite and non-restartable. At the first input
/// that matches no pattern the lexer yields a [`TokenizerError`]
/// carrying the stopping offset, and nothing after that.
///
/// A lexer holds no shared state; concurrent callers construct their
/// own instance per input.
pub struct Lexer<'a> {
    /// The inner logos lexer.
    inner: LogosLexer<'a, LogosToken>,
    /// The source being lexed.
    source: &'a str,
    /// Position of the most recently emitted token.
    position: Position,
    /// Set once the input is exhausted or an error was reported.
    done: bool,
}

/// Tracks the current position in the source.
#[derive(Debug, Clone, Copy)]
struct Position {
    offset: usize,
    line: usize,
    column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(source),
            source,
            position: Position::default(),
            done: false,
        }
    }

    /// Returns the next token, an error at the first unmatchable
    /// input, or `None` once the input is exhausted.
    fn next_token(&mut self) -> Option<Result<Token, TokenizerError>> {
        if self.done {
            return None;
        }
        let raw = match self.inner.next() {
            Some(raw) => raw,
            None => {
                self.done = true;
                return None;
            }
        };
        let span = self.inner.span();
        self.update_position(span.start);
        match raw {
            Ok(raw) => {
                let token = Token::new(
                    token_type(raw),
                    &self.source[span.clone()],
                    self.location(),
                );
                trace!("lexed {token}");
                Some(Ok(token))
            }
            Err(()) => {
                self.done = true;
                Some(Err(TokenizerError {
                    position: span.start,
                    length: self.source.len(),
                    input: self.source.to_string(),
                }))
            }
        }
    }

    /// Advances line and column over the text between the previous
    /// token's start and `start`.
    fn update_position(&mut self, start: usize) {
        let text = &self.source[self.position.offset..start];
        for c in text.chars() {
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else if c != '\r' {
                self.position.column += 1;
            }
        }
        self.position.offset = start;
    }

    fn location(&self) -> Location {
        Location {
            line: self.position.line,
            column: self.position.column,
            offset: self.position.offset,
        }
    }
}

/// Maps a raw logos token to the public token kind.
fn token_type(raw: LogosToken) -> TokenType {
    match raw {
        LogosToken::Float => TokenType::Float,
        LogosToken::Integer => TokenType::Integer,
        LogosToken::Plus => TokenType::Plus,
        LogosToken::Minus => TokenType::Minus,
        LogosToken::Whitespace => TokenType::Whitespace,
        LogosToken::LeftParen => TokenType::LeftParen,
        LogosToken::RightParen => TokenType::RightParen,
        LogosToken::Star => TokenType::Star,
        LogosToken::Slash => TokenType::Slash,
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, TokenizerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenType> {
        Lexer::new(source)
            .map(|r| r.expect("unexpected lex error").token_type)
            .collect()
    }

    #[test]
    fn test_simple_expression() {
        assert_eq!(
            kinds("2 + 3"),
            vec![
                TokenType::Integer,
                TokenType::Whitespace,
                TokenType::Plus,
                TokenType::Whitespace,
                TokenType::Integer,
            ]
        );
    }

    #[test]
    fn test_lexemes_and_locations() {
        let tokens: Vec<_> = Lexer::new("10 * (4.2)")
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(tokens[0].lexeme, "10");
        assert_eq!(tokens[0].location.offset, 0);
        assert_eq!(tokens[2].lexeme, "*");
        assert_eq!(tokens[2].location.column, 4);
        assert_eq!(tokens[5].token_type, TokenType::Float);
        assert_eq!(tokens[5].lexeme, "4.2");
        assert_eq!(tokens[5].location.offset, 6);
    }

    #[test]
    fn test_line_tracking() {
        let tokens: Vec<_> = Lexer::new("1 +\n2").map(|r| r.unwrap()).collect();
        let two = tokens.last().unwrap();
        assert_eq!(two.lexeme, "2");
        assert_eq!(two.location.line, 2);
        assert_eq!(two.location.column, 1);
    }

    #[test]
    fn test_unmatched_input_stops_the_stream() {
        let mut lexer = Lexer::new("2 + @");
        let mut seen = Vec::new();
        let err = loop {
            match lexer.next() {
                Some(Ok(token)) => seen.push(token.token_type),
                Some(Err(err)) => break err,
                None => panic!("expected a tokenizer error"),
            }
        };
        assert_eq!(
            seen,
            vec![
                TokenType::Integer,
                TokenType::Whitespace,
                TokenType::Plus,
                TokenType::Whitespace,
            ]
        );
        assert_eq!(err.position, 4);
        assert_eq!(err.length, 5);
        assert_eq!(err.input, "2 + @");
        // Fused after the error.
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_multi_digit_float_fails_at_the_dot() {
        let results: Vec<_> = Lexer::new("12.5").collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().lexeme, "12");
        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(Lexer::new("").next().is_none());
    }
}
