//! The recursive-descent parser.
//!
//! Grammar (whitespace elided only where shown):
//!
//! ```text
//! expr    := term (WHITESPACE* addop term)*
//! addop   := PLUS | MINUS
//! term    := factor (WHITESPACE* multop factor)*
//! multop  := STAR | SLASH
//! factor  := MINUS factor
//!          | INTEGER
//!          | FLOAT
//!          | LPAREN WHITESPACE* expr WHITESPACE* RPAREN
//! factor  := factor WHITESPACE*
//! ```
//!
//! Whitespace is consumed after every factor and around binary
//! operators, but never between a unary minus and its operand:
//! `-5` negates, `- 5` is a syntax error. Precedence falls out of the
//! rule layering, and binary operators fold left-associatively.

use arith_ast::ast::{
    BinaryExpressionNode, BinaryOperator, ExpressionNode, NumberNode, UnaryExpressionNode,
    UnaryOperator,
};
use arith_lexer::{Lexer, Location, Token, TokenType, TokenizerError};
use log::{debug, trace};
use thiserror::Error;

/// The token stream does not conform to the grammar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// A token of one kind appeared where another was required.
    #[error("expected {expected} but found {found} at {location}")]
    UnexpectedToken {
        /// The kind the grammar required.
        expected: TokenType,
        /// The kind actually encountered.
        found: TokenType,
        /// Where the mismatch happened.
        location: Location,
    },

    /// A factor position held a token that cannot start a factor.
    #[error("unexpected {found} at {location} where a number, '-' or '(' was expected")]
    UnexpectedFactor {
        /// The kind actually encountered.
        found: TokenType,
        /// Where the token starts.
        location: Location,
    },

    /// A complete expression was followed by more than whitespace.
    #[error("trailing input after expression: {found} at {location}")]
    TrailingInput {
        /// The first residual token.
        found: TokenType,
        /// Where the residual input starts.
        location: Location,
    },

    /// A numeric literal that does not fit its machine type.
    #[error("numeric literal {lexeme:?} at {location} is out of range")]
    InvalidNumber {
        /// The literal's source text.
        lexeme: String,
        /// Where the literal starts.
        location: Location,
    },
}

/// Everything that can go wrong while turning text into a tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The lexer hit input that matches no pattern.
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    /// The tokens do not form a valid expression.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Parses `source` into an expression tree.
///
/// The whole input must be one expression; residual tokens other than
/// trailing whitespace are an error.
pub fn parse_expression(source: &str) -> Result<ExpressionNode, ParseError> {
    Parser::new(source)?.parse()
}

/// A recursive-descent parser over a lazy token stream.
///
/// Holds exactly one token of lookahead (`current`); each `eat`
/// pulls the next token from the lexer, substituting a synthetic
/// end-of-input token when the stream runs out. A parser is built
/// per input and consumed by [`Parser::parse`].
pub struct Parser<'a> {
    tokens: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source` with the first token already
    /// buffered as lookahead.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut tokens = Lexer::new(source);
        let current = match tokens.next() {
            Some(result) => result?,
            None => Token::eof(Location::default()),
        };
        Ok(Self { tokens, current })
    }

    /// Parses one complete expression and requires the input to end
    /// after it, modulo trailing whitespace.
    pub fn parse(mut self) -> Result<ExpressionNode, ParseError> {
        let node = self.parse_expr()?;
        self.eat_whitespace()?;
        if self.current.token_type != TokenType::Eof {
            return Err(SyntaxError::TrailingInput {
                found: self.current.token_type,
                location: self.current.location,
            }
            .into());
        }
        Ok(node)
    }

    /// `expr := term (WHITESPACE* addop term)*`, folding left.
    fn parse_expr(&mut self) -> Result<ExpressionNode, ParseError> {
        debug!("parse_expr: begin");
        let mut node = self.parse_term()?;
        self.eat_whitespace()?;
        loop {
            let operator = match self.current.token_type {
                TokenType::Plus => BinaryOperator::Add,
                TokenType::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.eat(self.current.token_type)?;
            self.eat_whitespace()?;
            let right = self.parse_term()?;
            node = ExpressionNode::Binary(Box::new(BinaryExpressionNode {
                left: node,
                operator,
                right,
            }));
        }
        debug!("parse_expr: node: {node}");
        Ok(node)
    }

    /// `term := factor (WHITESPACE* multop factor)*`, folding left.
    fn parse_term(&mut self) -> Result<ExpressionNode, ParseError> {
        debug!("parse_term: begin");
        let mut node = self.parse_factor()?;
        self.eat_whitespace()?;
        loop {
            let operator = match self.current.token_type {
                TokenType::Star => BinaryOperator::Mul,
                TokenType::Slash => BinaryOperator::Div,
                _ => break,
            };
            self.eat(self.current.token_type)?;
            self.eat_whitespace()?;
            let right = self.parse_factor()?;
            node = ExpressionNode::Binary(Box::new(BinaryExpressionNode {
                left: node,
                operator,
                right,
            }));
        }
        Ok(node)
    }

    /// `factor := MINUS factor | INTEGER | FLOAT | LPAREN ... RPAREN`,
    /// with trailing whitespace consumed after the factor.
    fn parse_factor(&mut self) -> Result<ExpressionNode, ParseError> {
        debug!("parse_factor: begin at {}", self.current);
        let node = match self.current.token_type {
            TokenType::Integer => {
                let token = self.eat(TokenType::Integer)?;
                let value =
                    token
                        .lexeme
                        .parse::<i64>()
                        .map_err(|_| SyntaxError::InvalidNumber {
                            lexeme: token.lexeme.clone(),
                            location: token.location,
                        })?;
                ExpressionNode::Number(NumberNode::Int(value))
            }
            TokenType::Float => {
                let token = self.eat(TokenType::Float)?;
                let value =
                    token
                        .lexeme
                        .parse::<f64>()
                        .map_err(|_| SyntaxError::InvalidNumber {
                            lexeme: token.lexeme.clone(),
                            location: token.location,
                        })?;
                ExpressionNode::Number(NumberNode::Float(value))
            }
            TokenType::Minus => {
                self.eat(TokenType::Minus)?;
                // No whitespace may separate a unary minus from its
                // operand; the recursion sees the whitespace token
                // and rejects it.
                let operand = self.parse_factor()?;
                ExpressionNode::Unary(Box::new(UnaryExpressionNode {
                    operator: UnaryOperator::Neg,
                    operand,
                }))
            }
            TokenType::LeftParen => {
                self.eat(TokenType::LeftParen)?;
                self.eat_whitespace()?;
                let node = self.parse_expr()?;
                self.eat_whitespace()?;
                self.eat(TokenType::RightParen)?;
                node
            }
            found => {
                return Err(SyntaxError::UnexpectedFactor {
                    found,
                    location: self.current.location,
                }
                .into());
            }
        };
        self.eat_whitespace()?;
        debug!("parse_factor: node: {node}");
        Ok(node)
    }

    /// Consumes the lookahead if it has the expected kind, returning
    /// the eaten token; otherwise fails naming both kinds.
    fn eat(&mut self, token_type: TokenType) -> Result<Token, ParseError> {
        if self.current.token_type == token_type {
            trace!("eating {}", token_type);
            let eaten = self.advance()?;
            Ok(eaten)
        } else {
            Err(SyntaxError::UnexpectedToken {
                expected: token_type,
                found: self.current.token_type,
                location: self.current.location,
            }
            .into())
        }
    }

    /// Skips any run of whitespace tokens.
    fn eat_whitespace(&mut self) -> Result<(), ParseError> {
        while self.current.token_type == TokenType::Whitespace {
            self.eat(TokenType::Whitespace)?;
        }
        Ok(())
    }

    /// Replaces the lookahead with the next token from the lexer,
    /// substituting a synthetic end-of-input token when the stream is
    /// exhausted, and returns the previous lookahead.
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = match self.tokens.next() {
            Some(result) => result?,
            None => Token::eof(end_of(&self.current)),
        };
        trace!("lookahead: {next}");
        Ok(std::mem::replace(&mut self.current, next))
    }
}

/// The location just past `token`, where a synthetic end-of-input
/// token lives.
fn end_of(token: &Token) -> Location {
    Location {
        line: token.location.line,
        column: token.location.column + token.lexeme.chars().count(),
        offset: token.location.offset + token.lexeme.len(),
    }
}
