use crate::expression::Expression;
use crate::operator::traits::Operator;

/// Wraps an operator to charge mass by rendered text length instead of the
/// operand-mass sum, for generators that optimize for shortest text.
pub struct TextLengthMass<O> {
    inner: O,
    overhead: u32,
}

impl<O> TextLengthMass<O> {
    /// `overhead` is added on top of the operand text lengths and should
    /// cover the characters the operator itself contributes.
    pub fn new(inner: O, overhead: u32) -> Self {
        Self { inner, overhead }
    }
}

impl<O: Operator> Operator for TextLengthMass<O> {
    fn level(&self) -> u32 {
        self.inner.level()
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        self.inner.forward(left, right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        self.inner.build_text(left, right)
    }

    fn calc_mass(&self, left: &Expression, right: &Expression) -> u32 {
        let text_len = left.text.len().saturating_add(right.text.len());
        u32::try_from(text_len)
            .unwrap_or(u32::MAX)
            .saturating_add(self.overhead)
    }

    fn backward_left(&self, result: i64, left: i64) -> Option<i64> {
        self.inner.backward_left(result, left)
    }

    fn backward_right(&self, result: i64, right: i64) -> Option<i64> {
        self.inner.backward_right(result, right)
    }
}
