use thiserror::Error;

/// Errors reported by pool construction and queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolError {
    #[error(
        "Cache range [{cache_first}, {cache_last}] must cover the target range [{gen_first}, {gen_last}]"
    )]
    CacheRangeTooNarrow {
        cache_first: i64,
        cache_last: i64,
        gen_first: i64,
        gen_last: i64,
    },
    #[error("Max cache num must be at least 1")]
    InvalidMaxCacheNum,
    #[error("Base item list cannot be empty")]
    EmptyItems,
    #[error("Operator list cannot be empty")]
    EmptyOperators,
    #[error("Quality must be within [0, 1], got {0}")]
    InvalidQuality(f64),
    #[error("Value {0} is outside the target range")]
    OutOfRange(i64),
}
