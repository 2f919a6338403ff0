use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Arc;

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::expression::Expression;
use crate::operator::{OpRef, Operator};
use crate::pool::config::{PoolConfig, ResolvedConfig};
use crate::pool::errors::PoolError;

/// Pool of candidate expressions covering a closed integer range.
///
/// Construction runs the full generation search synchronously; afterwards the
/// pool is immutable and can serve concurrent read-only queries.
pub struct ExpressionPool {
    gen_range: RangeInclusive<i64>,
    values: HashMap<i64, Vec<Expression>>,
}

impl ExpressionPool {
    /// Build a pool covering `gen_range` from the given base items and
    /// operators, drawing randomness from the thread-local generator.
    ///
    /// Construction loops until every value in `gen_range` has at least one
    /// candidate. If the base items and operators cannot reach some value
    /// within the cache range, it never returns; callers wanting a timeout
    /// must supervise construction externally.
    ///
    /// # Errors
    ///
    /// Fails before any search work when the configuration is invalid: a
    /// cache range not covering `gen_range`, a candidate cap below 1, an
    /// empty item or operator list, or a quality outside `[0, 1]`.
    pub fn new(
        items: Vec<Expression>,
        operators: Vec<OpRef>,
        gen_range: RangeInclusive<i64>,
        config: PoolConfig,
    ) -> Result<Self, PoolError> {
        Self::with_rng(items, operators, gen_range, config, &mut rand::thread_rng())
    }

    /// Like [`new`](Self::new) with an injected random source, so a seeded
    /// generator makes an individual construction reproducible.
    ///
    /// # Errors
    ///
    /// Same configuration failures as [`new`](Self::new).
    pub fn with_rng<R: Rng + ?Sized>(
        items: Vec<Expression>,
        operators: Vec<OpRef>,
        gen_range: RangeInclusive<i64>,
        config: PoolConfig,
        rng: &mut R,
    ) -> Result<Self, PoolError> {
        let resolved = config.resolve(&gen_range)?;
        if items.is_empty() {
            warn!("No base items supplied");
            return Err(PoolError::EmptyItems);
        }
        if operators.is_empty() {
            warn!("No operators supplied");
            return Err(PoolError::EmptyOperators);
        }

        let (gen_first, gen_last) = (*gen_range.start(), *gen_range.end());
        info!(
            "Building pool for [{}, {}] from {} base items and {} operators",
            gen_first,
            gen_last,
            items.len(),
            operators.len()
        );

        let mut cache: HashMap<i64, Vec<Expression>> = HashMap::new();
        for item in items {
            cache.entry(item.value).or_default().push(item);
        }

        let range_span = (gen_last - gen_first) as f64;
        let mut forward = true;
        let mut ceiling: u32 = 1;
        let mut rounds: u64 = 0;

        while !(gen_first..=gen_last).all(|v| cache.contains_key(&v)) {
            rounds += 1;
            if forward {
                ceiling = ceiling.saturating_add(1);
                forward_round(&mut cache, &operators, &resolved, ceiling, rng);
                let covered = (gen_first..=gen_last)
                    .filter(|v| cache.contains_key(v))
                    .count();
                debug!(
                    "Forward round {}: mass ceiling {}, coverage {} of [{}, {}]",
                    rounds, ceiling, covered, gen_first, gen_last
                );
                // Span-based threshold, deliberately not a per-element
                // fraction of the range.
                forward = (covered as f64) < range_span * resolved.quality;
            } else {
                let missing = (gen_first..=gen_last)
                    .filter(|v| !cache.contains_key(v))
                    .count();
                debug!("Backward pass {}: {} values missing", rounds, missing);
                backward_pass(&mut cache, &operators, &resolved, gen_first, gen_last, rng);
                forward = true;
            }
        }

        info!("Pool complete after {} rounds", rounds);

        let mut values = HashMap::new();
        for v in gen_first..=gen_last {
            if let Some(list) = cache.remove(&v) {
                values.insert(v, list);
            }
        }

        Ok(Self { gen_range, values })
    }

    /// The closed integer interval this pool covers.
    pub fn gen_range(&self) -> &RangeInclusive<i64> {
        &self.gen_range
    }

    /// Text of a uniformly random cached candidate for `value`.
    ///
    /// # Errors
    ///
    /// Fails when `value` lies outside the covered range.
    pub fn get(&self, value: i64) -> Result<String, PoolError> {
        self.expression(value).map(|expr| expr.text.clone())
    }

    /// A uniformly random cached candidate for `value`.
    ///
    /// # Errors
    ///
    /// Fails when `value` lies outside the covered range.
    pub fn expression(&self, value: i64) -> Result<&Expression, PoolError> {
        let list = self.expressions(value)?;
        list.choose(&mut rand::thread_rng())
            .ok_or(PoolError::OutOfRange(value))
    }

    /// All cached candidates for `value`, between 1 and `max_cache_num`
    /// entries in unspecified order.
    ///
    /// # Errors
    ///
    /// Fails when `value` lies outside the covered range.
    pub fn expressions(&self, value: i64) -> Result<&[Expression], PoolError> {
        self.values
            .get(&value)
            .map(Vec::as_slice)
            .ok_or(PoolError::OutOfRange(value))
    }
}

fn sample<R: Rng + ?Sized>(
    cache: &HashMap<i64, Vec<Expression>>,
    value: i64,
    rng: &mut R,
) -> Option<Expression> {
    cache.get(&value).and_then(|list| list.choose(rng)).cloned()
}

/// One forward round: compose every ordered pair of cached values with every
/// operator, keeping sampled candidates whose mass stays under the ceiling.
fn forward_round<R: Rng + ?Sized>(
    cache: &mut HashMap<i64, Vec<Expression>>,
    operators: &[OpRef],
    cfg: &ResolvedConfig,
    ceiling: u32,
    rng: &mut R,
) {
    for i in cfg.cache_first..=cfg.cache_last {
        if !cache.contains_key(&i) {
            continue;
        }
        for j in cfg.cache_first..=cfg.cache_last {
            if !cache.contains_key(&j) {
                continue;
            }
            for op in operators {
                let Some(v) = op.forward(i, j) else {
                    continue;
                };
                if v < cfg.cache_first || v > cfg.cache_last {
                    continue;
                }
                for _ in 0..cfg.max_cache_num {
                    let Some(left) = sample(cache, i, rng) else {
                        break;
                    };
                    let Some(right) = sample(cache, j, rng) else {
                        break;
                    };
                    let mass = op.calc_mass(&left, &right);
                    if mass >= ceiling {
                        continue;
                    }
                    if let Some(best) = cache.get(&v).and_then(|list| list.first()) {
                        if mass > best.mass {
                            continue;
                        }
                    }
                    let text = op.build_text(&left, &right);
                    let list = cache.entry(v).or_default();
                    list.push(Expression::compound(v, text, mass, Arc::clone(op)));
                    if list.len() > cfg.max_cache_num {
                        let evict = rng.gen_range(0..list.len());
                        list.swap_remove(evict);
                    }
                }
            }
        }
    }
}

/// One backward pass: for every still-missing target value, use operator
/// inverses to complete a pair from one cached operand, keeping only
/// minimal-mass candidates.
fn backward_pass<R: Rng + ?Sized>(
    cache: &mut HashMap<i64, Vec<Expression>>,
    operators: &[OpRef],
    cfg: &ResolvedConfig,
    gen_first: i64,
    gen_last: i64,
    rng: &mut R,
) {
    for v in gen_first..=gen_last {
        if cache.contains_key(&v) {
            continue;
        }
        for i in cfg.cache_first..=cfg.cache_last {
            if !cache.contains_key(&i) {
                continue;
            }
            for op in operators {
                if let Some(j) = op.backward_left(v, i) {
                    if cache.contains_key(&j) {
                        // i is the left operand, j the recovered right
                        for _ in 0..cfg.max_cache_num {
                            let Some(left) = sample(cache, i, rng) else {
                                break;
                            };
                            let Some(right) = sample(cache, j, rng) else {
                                break;
                            };
                            accept_minimal(cache, v, op, left, right, cfg.max_cache_num, rng);
                        }
                    }
                }
                if let Some(j) = op.backward_right(v, i) {
                    if cache.contains_key(&j) {
                        // j is the recovered left operand, i the right;
                        // pair the candidate lists exhaustively
                        let lefts = cache.get(&j).cloned().unwrap_or_default();
                        let rights = cache.get(&i).cloned().unwrap_or_default();
                        for left in &lefts {
                            for right in &rights {
                                accept_minimal(
                                    cache,
                                    v,
                                    op,
                                    left.clone(),
                                    right.clone(),
                                    cfg.max_cache_num,
                                    rng,
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Keep `left op right` as a candidate for `v` only while it ties or beats
/// the best mass seen so far; a strict improvement discards earlier keeps.
fn accept_minimal<R: Rng + ?Sized>(
    cache: &mut HashMap<i64, Vec<Expression>>,
    v: i64,
    op: &OpRef,
    left: Expression,
    right: Expression,
    max_cache_num: usize,
    rng: &mut R,
) {
    let mass = op.calc_mass(&left, &right);
    let list = cache.entry(v).or_default();
    if let Some(best) = list.first() {
        if mass > best.mass {
            return;
        }
        if mass < best.mass {
            list.clear();
        }
    }
    let text = op.build_text(&left, &right);
    list.push(Expression::compound(v, text, mass, Arc::clone(op)));
    if list.len() > max_cache_num {
        let evict = rng.gen_range(0..list.len());
        list.swap_remove(evict);
    }
}
