//! Hand-sign arithmetic: every integer in 0..=100 rendered with emoji only.

use std::sync::Arc;

use memexpr::operator::{Add, Div, Mul, Sub};
use memexpr::{Expression, ExpressionPool, OpRef, PoolConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let items = vec![
        Expression::new(1, "👆"),
        Expression::new(2, "✌"),
        Expression::new(5, "🖐"),
        Expression::new(6, "🤙"),
        Expression::new(10, "🤞"),
    ];
    // parentheses become pointing hands
    let operators: Vec<OpRef> = vec![
        Arc::new(Add::new().symbol("➕").brackets("👉", "👈")),
        Arc::new(Sub::new().symbol("➖").brackets("👉", "👈")),
        Arc::new(Mul::new().symbol("✖").brackets("👉", "👈")),
        Arc::new(Div::new().symbol("➗").brackets("👉", "👈")),
    ];

    let pool = ExpressionPool::new(items, operators, 0..=100, PoolConfig::default())?;

    for value in 0..=100 {
        println!("{} -> {}", value, pool.get(value)?);
    }

    Ok(())
}
