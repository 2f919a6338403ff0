use std::sync::Arc;

use crate::expression::Expression;
use crate::operator::{
    Add, BitAnd, BitOr, BitXor, Div, Mod, Mul, OpRef, Operator, Primitive, Sub, TextLengthMass,
};

#[test]
fn test_add_forward_and_backward() {
    let add = Add::new();
    assert_eq!(add.forward(2, 3), Some(5));
    assert_eq!(add.backward_left(5, 2), Some(3));
    assert_eq!(add.backward_right(5, 3), None);
}

#[test]
fn test_sub_forward_and_backward() {
    let sub = Sub::new();
    assert_eq!(sub.forward(5, 2), Some(3));
    // right operand from result and left: 5 - x = 3 => x = 2
    assert_eq!(sub.backward_left(3, 5), Some(2));
    // left operand from result and right: x - 2 = 3 => x = 5
    assert_eq!(sub.backward_right(3, 2), Some(5));
}

#[test]
fn test_mul_forward_and_backward() {
    let mul = Mul::new();
    assert_eq!(mul.forward(4, 3), Some(12));
    assert_eq!(mul.backward_left(12, 4), Some(3));
    assert_eq!(mul.backward_left(12, 5), None);
    assert_eq!(mul.backward_left(12, 0), None);
}

#[test]
fn test_div_forward_requires_exact_division() {
    let div = Div::new();
    assert_eq!(div.forward(12, 4), Some(3));
    assert_eq!(div.forward(12, 5), None);
    assert_eq!(div.forward(12, 0), None);
}

#[test]
fn test_div_backward() {
    let div = Div::new();
    // 12 / x = 3 => x = 4
    assert_eq!(div.backward_left(3, 12), Some(4));
    assert_eq!(div.backward_left(5, 12), None);
    assert_eq!(div.backward_left(0, 12), None);
    // x / 4 = 3 => x = 12
    assert_eq!(div.backward_right(3, 4), Some(12));
    assert_eq!(div.backward_right(3, 0), None);
}

#[test]
fn test_mod_forward_guards() {
    let op = Mod::new();
    assert_eq!(op.forward(7, 3), Some(1));
    assert_eq!(op.forward(7, 0), None);
    assert_eq!(op.forward(7, -2), None);
    assert_eq!(op.forward(3, 7), None);
    assert_eq!(op.forward(3, 3), None);
}

#[test]
fn test_bitwise_forward() {
    assert_eq!(BitAnd::new().forward(6, 3), Some(2));
    assert_eq!(BitOr::new().forward(6, 3), Some(7));
    assert_eq!(BitXor::new().forward(6, 3), Some(5));
    assert_eq!(BitXor::new().backward_left(5, 6), Some(3));
}

#[test]
fn test_overflow_is_not_computable() {
    assert_eq!(Add::new().forward(i64::MAX, 1), None);
    assert_eq!(Sub::new().forward(i64::MIN, 1), None);
    assert_eq!(Mul::new().forward(i64::MAX, 2), None);
    assert_eq!(Mul::new().backward_left(i64::MIN, -1), None);
}

#[test]
fn test_backward_agrees_with_forward() {
    let ops: Vec<OpRef> = vec![
        Arc::new(Add::new()),
        Arc::new(Sub::new()),
        Arc::new(Mul::new()),
        Arc::new(Div::new()),
        Arc::new(BitXor::new()),
    ];
    for op in &ops {
        for left in -6..=6 {
            for right in -6..=6 {
                let Some(result) = op.forward(left, right) else {
                    continue;
                };
                if let Some(recovered) = op.backward_left(result, left) {
                    assert_eq!(
                        op.forward(left, recovered),
                        Some(result),
                        "backward_left disagrees for {} . {}",
                        left,
                        right
                    );
                }
                if let Some(recovered) = op.backward_right(result, right) {
                    assert_eq!(
                        op.forward(recovered, right),
                        Some(result),
                        "backward_right disagrees for {} . {}",
                        left,
                        right
                    );
                }
            }
        }
    }
}

#[test]
fn test_build_text_wraps_looser_operands() {
    let add: OpRef = Arc::new(Add::new());
    let mul = Mul::new();
    let sum = Expression::compound(3, "1 + 2".to_string(), 2, Arc::clone(&add));
    let two = Expression::new(2, "2");
    assert_eq!(mul.build_text(&sum, &two), "(1 + 2) * 2");
    assert_eq!(mul.build_text(&two, &sum), "2 * (1 + 2)");
}

#[test]
fn test_sub_wraps_right_operand_at_same_level() {
    let add: OpRef = Arc::new(Add::new());
    let sum = Expression::compound(3, "1 + 2".to_string(), 2, add);
    let five = Expression::new(5, "5");
    // 5 - (1 + 2), never 5 - 1 + 2
    assert_eq!(Sub::new().build_text(&five, &sum), "5 - (1 + 2)");
    // but 1 + 2 - 5 binds fine on the left
    assert_eq!(Sub::new().build_text(&sum, &five), "1 + 2 - 5");
}

#[test]
fn test_symbol_and_bracket_customization() {
    let add = Add::new().symbol("➕").brackets("👉", "👈");
    let mul: OpRef = Arc::new(Mul::new().symbol("✖"));
    let product = Expression::compound(6, "2✖3".to_string(), 2, Arc::clone(&mul));
    let one = Expression::new(1, "👆");
    assert_eq!(add.build_text(&one, &product), "👆➕2✖3");

    let sum_op: OpRef = Arc::new(Add::new());
    let sum = Expression::compound(3, "👆➕✌".to_string(), 2, sum_op);
    let mul_emoji = Mul::new().symbol("✖").brackets("👉", "👈");
    assert_eq!(mul_emoji.build_text(&sum, &one), "👉👆➕✌👈✖👆");
}

#[test]
fn test_default_mass_is_operand_sum() {
    let left = Expression::with_mass(1, "1", 2);
    let right = Expression::with_mass(2, "2", 3);
    assert_eq!(Add::new().calc_mass(&left, &right), 5);
}

#[test]
fn test_text_length_mass() {
    let op = TextLengthMass::new(Add::new().symbol("+"), 1);
    let left = Expression::with_mass(0, "+[]", 3);
    let right = Expression::with_mass(1, "-~[]", 4);
    assert_eq!(op.calc_mass(&left, &right), 8);
    // everything else delegates
    assert_eq!(op.forward(2, 3), Some(5));
    assert_eq!(op.backward_left(5, 2), Some(3));
    assert_eq!(op.level(), Add::new().level());
    assert_eq!(op.build_text(&left, &right), "+[]+-~[]");
}

#[test]
fn test_primitive_is_inert() {
    let primitive = Primitive;
    assert_eq!(primitive.level(), u32::MAX);
    assert_eq!(primitive.forward(1, 2), None);
    assert_eq!(primitive.backward_left(1, 2), None);
    assert_eq!(primitive.backward_right(1, 2), None);
}
