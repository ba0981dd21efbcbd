//! Evaluation of Arith expressions.
//!
//! Ties the pipeline together: text is tokenized lazily inside the
//! parser, the resulting tree is reduced by the evaluating visitor,
//! and [`evaluate`] is the single entry point callers need.
//!
//! Every stage is fail-fast: the first tokenizer, syntax or
//! evaluation error surfaces unchanged, with no partial results.

#![warn(missing_docs)]

pub mod evaluator;
pub mod value;

pub use evaluator::{EvalError, Evaluator};
pub use value::Value;

use arith_lexer::TokenizerError;
use arith_parser::{ParseError, SyntaxError};

/// Any failure the pipeline can produce.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input contains characters no lexical pattern matches.
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    /// The input does not conform to the expression grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The expression is well-formed but cannot be computed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Tokenizer(err) => Error::Tokenizer(err),
            ParseError::Syntax(err) => Error::Syntax(err),
        }
    }
}

/// Evaluates the arithmetic expression in `text`.
///
/// ```
/// use arith_eval::{evaluate, Value};
///
/// assert_eq!(evaluate("2 / 2 + 3 * 4 - 6").unwrap(), Value::Int(7));
/// assert_eq!(evaluate("10/4").unwrap(), Value::Float(2.5));
/// ```
pub fn evaluate(text: &str) -> Result<Value, Error> {
    let tree = arith_parser::parse_expression(text)?;
    log::debug!("parsed: {tree}");
    Ok(Evaluator::new().eval(&tree)?)
}
