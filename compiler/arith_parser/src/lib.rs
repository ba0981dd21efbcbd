//! Recursive-descent parser for the Arith expression language.
//!
//! The parser pulls tokens lazily from [`arith_lexer::Lexer`] through
//! a single-token lookahead buffer and builds an
//! [`arith_ast::ast::ExpressionNode`] tree. Operator precedence is
//! encoded structurally in the grammar rules; see [`parser`].

#![warn(missing_docs)]

pub mod parser;

pub use parser::{parse_expression, ParseError, Parser, SyntaxError};
