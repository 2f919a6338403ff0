//! Render 0..=100 from the base set {2, 3, 5, 7} with the full built-in
//! operator set.

use std::sync::Arc;

use memexpr::operator::{Add, BitAnd, BitOr, BitXor, Div, Mod, Mul, Sub};
use memexpr::{Expression, ExpressionPool, OpRef, PoolConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let items = vec![
        Expression::new(2, "2"),
        Expression::new(3, "3"),
        Expression::new(5, "5"),
        Expression::new(7, "7"),
    ];
    let operators: Vec<OpRef> = vec![
        Arc::new(Add::new()),
        Arc::new(Sub::new()),
        Arc::new(Mul::new()),
        Arc::new(Div::new()),
        Arc::new(Mod::new()),
        Arc::new(BitAnd::new()),
        Arc::new(BitOr::new()),
        Arc::new(BitXor::new()),
    ];

    let pool = ExpressionPool::new(items, operators, 0..=100, PoolConfig::default())?;

    for value in 0..=100 {
        println!("{} -> {}", value, pool.get(value)?);
    }

    Ok(())
}
