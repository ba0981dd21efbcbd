//! Visitor seam for AST consumers.
//!
//! Dispatch is a structural match over the closed node set, so a
//! visitor that compiles handles every variant; there is no
//! "unrecognized node" failure mode at runtime.

use crate::ast::{BinaryExpressionNode, ExpressionNode, NumberNode, UnaryExpressionNode};

/// A visitor over expression trees.
///
/// Implementors choose both the produced value and the error type;
/// the evaluator, for example, produces a numeric value and a
/// runtime error.
pub trait Visitor {
    /// The value produced for each visited node.
    type Output;
    /// The error a visit can fail with.
    type Error;

    /// Visits a number literal.
    fn visit_number(&mut self, node: &NumberNode) -> Result<Self::Output, Self::Error>;

    /// Visits a binary operation.
    fn visit_binary_expr(
        &mut self,
        node: &BinaryExpressionNode,
    ) -> Result<Self::Output, Self::Error>;

    /// Visits a unary operation.
    fn visit_unary_expr(&mut self, node: &UnaryExpressionNode)
        -> Result<Self::Output, Self::Error>;
}

/// A type that can be visited by a [`Visitor`].
pub trait Visitable {
    /// Accepts a visitor and dispatches to the matching visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error>;
}

impl Visitable for ExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            ExpressionNode::Number(node) => visitor.visit_number(node),
            ExpressionNode::Binary(node) => visitor.visit_binary_expr(node),
            ExpressionNode::Unary(node) => visitor.visit_unary_expr(node),
        }
    }
}
