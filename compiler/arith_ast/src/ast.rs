//! AST node definitions for Arith expressions.
//!
//! The node set is closed: a number literal, a binary operation and a
//! unary operation. Nodes form a tree with strict parent-to-child
//! ownership; there is no sharing and no cycles.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExpressionNode {
    /// A numeric literal.
    Number(NumberNode),
    /// A binary operation.
    Binary(Box<BinaryExpressionNode>),
    /// A unary operation.
    Unary(Box<UnaryExpressionNode>),
}

/// A numeric literal.
///
/// The variant is fixed at parse time by which lexical pattern
/// matched: `Int` for integer tokens, `Float` for float tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberNode {
    /// An exact integer.
    Int(i64),
    /// A floating-point value.
    Float(f64),
}

/// A binary operation; both operands are owned exclusively by this
/// node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpressionNode {
    /// The left operand.
    pub left: ExpressionNode,
    /// The operator.
    pub operator: BinaryOperator,
    /// The right operand.
    pub right: ExpressionNode,
}

/// The binary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// A unary operation; the operand is owned exclusively by this node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryExpressionNode {
    /// The operator.
    pub operator: UnaryOperator,
    /// The operand.
    pub operand: ExpressionNode,
}

/// The unary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOperator {
    /// Arithmetic negation.
    Neg,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Neg => f.write_str("-"),
        }
    }
}

impl fmt::Display for NumberNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberNode::Int(value) => write!(f, "{value}"),
            NumberNode::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Fully parenthesized rendering, for diagnostics and the CLI's
/// `--ast` output.
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Number(node) => write!(f, "{node}"),
            ExpressionNode::Binary(node) => {
                write!(f, "({} {} {})", node.left, node.operator, node.right)
            }
            ExpressionNode::Unary(node) => write!(f, "({}{})", node.operator, node.operand),
        }
    }
}
