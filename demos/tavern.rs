//! Tavern ledger arithmetic: counts in 0..=100 written with a three-word
//! vocabulary.

use std::sync::Arc;

use memexpr::operator::{Add, Div, Mod, Mul, Sub};
use memexpr::{Expression, ExpressionPool, OpRef, PoolConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let items = vec![
        Expression::new(40, "a flagon"),
        Expression::new(80, "a barrel"),
        Expression::new(180, "the royal reserve"),
    ];
    let operators: Vec<OpRef> = vec![
        Arc::new(Add::new().symbol(" plus ")),
        Arc::new(Sub::new().symbol(" minus ")),
        Arc::new(Mul::new().symbol(" times ")),
        Arc::new(Div::new().symbol(" over ")),
        Arc::new(Mod::new().symbol(" modulo ")),
    ];

    let pool = ExpressionPool::new(items, operators, 0..=100, PoolConfig::default())?;

    for value in 0..=100 {
        println!("{} -> {}", value, pool.get(value)?);
    }

    Ok(())
}
