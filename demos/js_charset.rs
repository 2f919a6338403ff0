//! JavaScript expressions for 0..=100 using no letters or digits.
//!
//! Every operator charges mass by rendered text length, so the pool keeps
//! the shortest expressions it finds. A digit-concatenation operator
//! reproduces the `''+1+1-0 = 11` coercion trick, and the add/sub renderers
//! space out leading `+`/`-` so the output never forms `++` or `--` tokens.

use std::sync::Arc;

use memexpr::operator::{BitAnd, BitOr, BitXor, Div, Mod, Mul, TextLengthMass};
use memexpr::{Expression, ExpressionPool, OpRef, Operator, PoolConfig};

/// Reserved level marking concatenation output, so nested concatenations can
/// be spliced together instead of re-wrapped.
const CONCAT_LEVEL: u32 = u32::MAX - 1;

fn split_plus(text: String) -> String {
    if text.starts_with('+') {
        format!(" {}", text)
    } else {
        text
    }
}

fn split_minus(text: String) -> String {
    if text.starts_with('-') {
        format!(" {}", text)
    } else {
        text
    }
}

struct JsAdd;

impl Operator for JsAdd {
    fn level(&self) -> u32 {
        3
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        left.checked_add(right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        format!("{}+{}", left.wrap(3), split_plus(right.wrap(3)))
    }

    fn calc_mass(&self, left: &Expression, right: &Expression) -> u32 {
        (left.text.len() + right.text.len()) as u32 + 1
    }

    fn backward_left(&self, result: i64, left: i64) -> Option<i64> {
        result.checked_sub(left)
    }
}

struct JsSub;

impl Operator for JsSub {
    fn level(&self) -> u32 {
        3
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        left.checked_sub(right)
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        format!("{}-{}", left.wrap(3), split_minus(right.wrap(4)))
    }

    fn calc_mass(&self, left: &Expression, right: &Expression) -> u32 {
        (left.text.len() + right.text.len()) as u32 + 1
    }

    fn backward_left(&self, result: i64, left: i64) -> Option<i64> {
        left.checked_sub(result)
    }

    fn backward_right(&self, result: i64, right: i64) -> Option<i64> {
        result.checked_add(right)
    }
}

/// Digit concatenation via string coercion: `([]+a+b-[])`.
struct CatStr;

impl CatStr {
    fn operand_text(expr: &Expression) -> String {
        if expr.op.level() == CONCAT_LEVEL {
            // splice an inner concatenation: strip "([]+" and "-[])"
            expr.text[4..expr.text.len() - 4].to_string()
        } else {
            split_plus(expr.wrap(4))
        }
    }
}

impl Operator for CatStr {
    fn level(&self) -> u32 {
        CONCAT_LEVEL
    }

    fn forward(&self, left: i64, right: i64) -> Option<i64> {
        if right < 0 {
            return None;
        }
        format!("{}{}", left, right).parse().ok()
    }

    fn build_text(&self, left: &Expression, right: &Expression) -> String {
        format!(
            "([]+{}+{}-[])",
            Self::operand_text(left),
            Self::operand_text(right)
        )
    }

    fn calc_mass(&self, left: &Expression, right: &Expression) -> u32 {
        let overhead = if left.op.level() == CONCAT_LEVEL || right.op.level() == CONCAT_LEVEL {
            0
        } else {
            8
        };
        (left.text.len() + right.text.len()) as u32 + overhead
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let items = vec![
        Expression::with_mass(-1, "~[]", 3),
        Expression::with_mass(-1, "~{}", 3),
        Expression::with_mass(0, "+[]", 3),
        Expression::with_mass(0, "-[]", 3),
        Expression::with_mass(1, "-~[]", 4),
        Expression::with_mass(1, "-~{}", 4),
    ];
    let operators: Vec<OpRef> = vec![
        Arc::new(JsAdd),
        Arc::new(JsSub),
        Arc::new(TextLengthMass::new(Mul::new().symbol("*"), 1)),
        Arc::new(TextLengthMass::new(Div::new().symbol("/"), 1)),
        Arc::new(TextLengthMass::new(Mod::new().symbol("%"), 1)),
        Arc::new(TextLengthMass::new(BitAnd::new().symbol("&"), 1)),
        Arc::new(TextLengthMass::new(BitOr::new().symbol("|"), 1)),
        Arc::new(TextLengthMass::new(BitXor::new().symbol("^"), 1)),
        Arc::new(CatStr),
    ];

    let pool = ExpressionPool::new(items, operators, 0..=100, PoolConfig::default())?;

    for value in 0..=100 {
        println!("{} -> {}", value, pool.get(value)?);
    }

    Ok(())
}
