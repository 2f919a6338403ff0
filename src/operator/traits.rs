use std::sync::Arc;

use crate::expression::Expression;

/// Shared handle to a dynamically dispatched operator.
pub type OpRef = Arc<dyn Operator>;

/// A binary unit of computation plus text rendering, with optional inverse
/// computation used to accelerate backward generation.
///
/// `forward` fuses the applicability check with the computation: `None`
/// means the operand pair is not computable (guard failed, or the result
/// would overflow). The same convention makes "no backward support" an
/// explicit state — the default `backward_*` implementations return `None`
/// for every input, and an operator opts in by overriding one or both.
///
/// Implementations must keep `forward` and `build_text` in agreement: the
/// rendered text, evaluated under the caller's semantics for this operator
/// set, must reproduce the `forward` result. The pool does not verify this.
pub trait Operator: Send + Sync {
    /// Precedence rank, used only to decide whether a sub-expression needs
    /// parenthesizing when embedded in a larger one.
    fn level(&self) -> u32;

    /// Apply the operator, or report the pair as not computable.
    fn forward(&self, left: i64, right: i64) -> Option<i64>;

    /// Render the combined expression text from the two operand expressions.
    fn build_text(&self, left: &Expression, right: &Expression) -> String;

    /// Mass of the combined expression. Defaults to the sum of the operand
    /// masses; override to optimize for a different notion of simplicity.
    fn calc_mass(&self, left: &Expression, right: &Expression) -> u32 {
        left.mass.saturating_add(right.mass)
    }

    /// Recover the right operand from a desired result and a known left
    /// operand. `None` when unsupported or not invertible for these values.
    fn backward_left(&self, result: i64, left: i64) -> Option<i64> {
        let _ = (result, left);
        None
    }

    /// Recover the left operand from a desired result and a known right
    /// operand. `None` when unsupported or not invertible for these values.
    fn backward_right(&self, result: i64, right: i64) -> Option<i64> {
        let _ = (result, right);
        None
    }
}

/// Sentinel operator carried by base items.
///
/// Reports the maximal precedence level so base items are never
/// parenthesized, and is never computable as an active operator.
pub struct Primitive;

impl Operator for Primitive {
    fn level(&self) -> u32 {
        u32::MAX
    }

    fn forward(&self, _left: i64, _right: i64) -> Option<i64> {
        None
    }

    fn build_text(&self, _left: &Expression, _right: &Expression) -> String {
        String::new()
    }
}
