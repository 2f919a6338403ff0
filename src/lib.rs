//! Memexpr - compact symbolic renderings of integers
//!
//! This library builds a pool mapping every integer in a target range to at
//! least one expression composed from caller-supplied base items and binary
//! operators, preferring short (low "mass") renderings. Callers configure
//! what the expressions look like — emoji, obfuscated JavaScript, plain
//! arithmetic — by choosing base items and operator instances; the pool only
//! searches and caches.
//!
//! Note that the search does not check whether the supplied items and
//! operators can actually reach every value in the target range; when they
//! cannot, construction loops forever.

pub mod expression;
pub mod operator;
pub mod pool;

// Re-export the main public API
pub use expression::Expression;
pub use operator::{OpRef, Operator, Primitive};
pub use pool::{ExpressionPool, PoolConfig, PoolError};

/// Build a pool over `range` using decimal renderings of `bases` as base
/// items and the standard arithmetic operator set.
///
/// This is a convenience wrapper over [`ExpressionPool::new`] with default
/// tuning.
///
/// # Arguments
///
/// * `bases` - Base values, each seeded as its decimal text
/// * `range` - The closed interval of values the pool must cover
///
/// # Errors
///
/// This function will return an error if:
/// * `bases` is empty
/// * Default tuning is invalid for the range (cannot happen for the
///   defaults, but the validation still runs eagerly)
///
/// # Examples
///
/// ```
/// use memexpr::standard_pool;
///
/// let pool = standard_pool(&[1, 2], 0..=5)?;
/// let text = pool.get(3)?;
/// assert!(!text.is_empty());
/// # Ok::<(), memexpr::PoolError>(())
/// ```
pub fn standard_pool(
    bases: &[i64],
    range: std::ops::RangeInclusive<i64>,
) -> Result<ExpressionPool, PoolError> {
    let items = bases
        .iter()
        .map(|&value| Expression::new(value, value.to_string()))
        .collect();
    ExpressionPool::new(items, operator::arithmetic_ops(), range, PoolConfig::default())
}
