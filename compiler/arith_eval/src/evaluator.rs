//! Tree-walking evaluation of expression trees.

use arith_ast::ast::{
    BinaryExpressionNode, BinaryOperator, ExpressionNode, NumberNode, UnaryExpressionNode,
    UnaryOperator,
};
use arith_ast::visit::{Visitable, Visitor};
use thiserror::Error;

use crate::value::Value;

/// Evaluation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Division by an exactly zero divisor, integer or float. The
    /// evaluator never produces an IEEE infinity or NaN this way.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer arithmetic exceeded the range of `i64`.
    #[error("integer overflow while evaluating expression")]
    Overflow,
}

/// A visitor that reduces an expression tree to a single [`Value`].
///
/// Stateless and pure: one evaluator may evaluate any number of
/// trees, and independent callers need no coordination.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates an evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `tree` to a numeric value.
    pub fn eval(&mut self, tree: &ExpressionNode) -> Result<Value, EvalError> {
        tree.accept(self)
    }
}

impl Visitor for Evaluator {
    type Output = Value;
    type Error = EvalError;

    fn visit_number(&mut self, node: &NumberNode) -> Result<Value, EvalError> {
        Ok(match *node {
            NumberNode::Int(value) => Value::Int(value),
            NumberNode::Float(value) => Value::Float(value),
        })
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> Result<Value, EvalError> {
        let left = node.left.accept(self)?;
        let right = node.right.accept(self)?;
        apply_binary(node.operator, left, right)
    }

    fn visit_unary_expr(&mut self, node: &UnaryExpressionNode) -> Result<Value, EvalError> {
        let operand = node.operand.accept(self)?;
        match node.operator {
            UnaryOperator::Neg => negate(operand),
        }
    }
}

fn apply_binary(operator: BinaryOperator, left: Value, right: Value) -> Result<Value, EvalError> {
    match operator {
        BinaryOperator::Add => promote(left, right, i64::checked_add, |a, b| a + b),
        BinaryOperator::Sub => promote(left, right, i64::checked_sub, |a, b| a - b),
        BinaryOperator::Mul => promote(left, right, i64::checked_mul, |a, b| a * b),
        BinaryOperator::Div => divide(left, right),
    }
}

/// Numeric-tower promotion: two integers stay integers (checked),
/// anything else goes through `f64`.
fn promote(
    left: Value,
    right: Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => {
            int_op(a, b).map(Value::Int).ok_or(EvalError::Overflow)
        }
        _ => Ok(Value::Float(float_op(left.as_f64(), right.as_f64()))),
    }
}

/// True division: `10 / 4` is `2.5`. An exact integer quotient stays
/// an integer; a zero divisor of either type is an error.
fn divide(left: Value, right: Value) -> Result<Value, EvalError> {
    if right.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => match a.checked_rem(b) {
            Some(0) => a.checked_div(b).map(Value::Int).ok_or(EvalError::Overflow),
            Some(_) => Ok(Value::Float(a as f64 / b as f64)),
            // i64::MIN / -1
            None => Err(EvalError::Overflow),
        },
        _ => Ok(Value::Float(left.as_f64() / right.as_f64())),
    }
}

fn negate(value: Value) -> Result<Value, EvalError> {
    match value {
        Value::Int(v) => v.checked_neg().map(Value::Int).ok_or(EvalError::Overflow),
        Value::Float(v) => Ok(Value::Float(-v)),
    }
}
