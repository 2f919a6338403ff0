use std::sync::Arc;

use crate::expression::Expression;
use crate::operator::traits::{OpRef, Operator};

/// Rendering data shared by the built-in operators: the infix symbol and the
/// bracket pair used when a sub-expression needs wrapping.
#[derive(Clone)]
struct Infix {
    symbol: String,
    open: String,
    close: String,
}

impl Infix {
    fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            open: "(".to_string(),
            close: ")".to_string(),
        }
    }

    fn render(
        &self,
        left: &Expression,
        left_level: u32,
        right: &Expression,
        right_level: u32,
    ) -> String {
        format!(
            "{}{}{}",
            left.wrap_with(left_level, &self.open, &self.close),
            self.symbol,
            right.wrap_with(right_level, &self.open, &self.close)
        )
    }
}

macro_rules! infix_customizers {
    ($ty:ident) => {
        impl $ty {
            /// Replace the rendered operator symbol.
            pub fn symbol(mut self, symbol: &str) -> Self {
                self.infix.symbol = symbol.to_string();
                self
            }

            /// Replace the bracket pair used when wrapping sub-expressions.
            pub fn brackets(mut self, open: &str, close: &str) -> Self {
                self.infix.open = open.to_string();
                self.infix.close = close.to_string();
                self
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// Integer addition.
pub struct Add {
    infix: Infix,
}

impl Add {
    pub fn new() -> Self {
        Self {
            infix: Infix::new(" + "),
        }
    }
}

infix_customizers!(Add);

impl Operator for Add {
    fn level(&self) -> u32 {
        3
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        left.checked_add(right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        self.infix.render(left, 3, right, 3)
    }

    fn backward_left(&self, result: i64, left: i64) -> Option<i64> {
        result.checked_sub(left)
    }
}

/// Integer subtraction.
pub struct Sub {
    infix: Infix,
}

impl Sub {
    pub fn new() -> Self {
        Self {
            infix: Infix::new(" - "),
        }
    }
}

infix_customizers!(Sub);

impl Operator for Sub {
    fn level(&self) -> u32 {
        3
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        left.checked_sub(right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        self.infix.render(left, 3, right, 4)
    }

    fn backward_left(&self, result: i64, left: i64) -> Option<i64> {
        left.checked_sub(result)
    }

    fn backward_right(&self, result: i64, right: i64) -> Option<i64> {
        result.checked_add(right)
    }
}

/// Integer multiplication.
pub struct Mul {
    infix: Infix,
}

impl Mul {
    pub fn new() -> Self {
        Self {
            infix: Infix::new(" * "),
        }
    }
}

infix_customizers!(Mul);

impl Operator for Mul {
    fn level(&self) -> u32 {
        5
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        left.checked_mul(right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        self.infix.render(left, 5, right, 5)
    }

    fn backward_left(&self, result: i64, left: i64) -> Option<i64> {
        if result.checked_rem(left)? != 0 {
            return None;
        }
        result.checked_div(left)
    }
}

/// Exact integer division. Only pairs that divide without remainder are
/// computable, so a division by zero can never be rendered.
pub struct Div {
    infix: Infix,
}

impl Div {
    pub fn new() -> Self {
        Self {
            infix: Infix::new(" / "),
        }
    }
}

infix_customizers!(Div);

impl Operator for Div {
    fn level(&self) -> u32 {
        5
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        if left.checked_rem(right)? != 0 {
            return None;
        }
        left.checked_div(right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        self.infix.render(left, 5, right, 6)
    }

    fn backward_left(&self, result: i64, left: i64) -> Option<i64> {
        if left.checked_rem(result)? != 0 {
            return None;
        }
        let right = left.checked_div(result)?;
        (right != 0).then_some(right)
    }

    fn backward_right(&self, result: i64, right: i64) -> Option<i64> {
        if right == 0 {
            return None;
        }
        result.checked_mul(right)
    }
}

/// Integer remainder. Restricted to `1 <= right < left` so the result is
/// never negative and the pair is always well defined.
pub struct Mod {
    infix: Infix,
}

impl Mod {
    pub fn new() -> Self {
        Self {
            infix: Infix::new(" % "),
        }
    }
}

infix_customizers!(Mod);

impl Operator for Mod {
    fn level(&self) -> u32 {
        4
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        (right >= 1 && right < left).then(|| left % right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        self.infix.render(left, 5, right, 6)
    }
}

/// Bitwise AND.
pub struct BitAnd {
    infix: Infix,
}

impl BitAnd {
    pub fn new() -> Self {
        Self {
            infix: Infix::new(" & "),
        }
    }
}

infix_customizers!(BitAnd);

impl Operator for BitAnd {
    fn level(&self) -> u32 {
        2
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        Some(left & right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        self.infix.render(left, 2, right, 2)
    }
}

/// Bitwise OR.
pub struct BitOr {
    infix: Infix,
}

impl BitOr {
    pub fn new() -> Self {
        Self {
            infix: Infix::new(" | "),
        }
    }
}

infix_customizers!(BitOr);

impl Operator for BitOr {
    fn level(&self) -> u32 {
        0
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        Some(left | right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        self.infix.render(left, 0, right, 0)
    }
}

/// Bitwise XOR.
pub struct BitXor {
    infix: Infix,
}

impl BitXor {
    pub fn new() -> Self {
        Self {
            infix: Infix::new(" ^ "),
        }
    }
}

infix_customizers!(BitXor);

impl Operator for BitXor {
    fn level(&self) -> u32 {
        1
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        Some(left ^ right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        self.infix.render(left, 1, right, 1)
    }

    fn backward_left(&self, result: i64, left: i64) -> Option<i64> {
        Some(result ^ left)
    }
}

/// The standard four-function operator set.
pub fn arithmetic_ops() -> Vec<OpRef> {
    vec![
        Arc::new(Add::new()),
        Arc::new(Sub::new()),
        Arc::new(Mul::new()),
        Arc::new(Div::new()),
    ]
}
