use std::ops::RangeInclusive;

use log::warn;

use crate::pool::errors::PoolError;

/// Tuning parameters for pool construction.
///
/// `cache_range` bounds which intermediate values may be cached and combined
/// during the search; it must cover the target range and defaults to the
/// symmetric interval `[-2m, 2m]` where `m` is the largest absolute target
/// bound. `max_cache_num` caps the candidate list per value (diversity vs.
/// memory). `quality` in `[0, 1]` sets how much of the target range forward
/// search must cover before backward inference takes over; values around
/// 0.75 tend to be fastest when the operator set supports inversion.
#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub cache_range: Option<RangeInclusive<i64>>,
    pub max_cache_num: usize,
    pub quality: f64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            cache_range: None,
            max_cache_num: 5,
            quality: 1.0,
        }
    }
}

/// Validated parameters actually driving the search.
pub(crate) struct ResolvedConfig {
    pub cache_first: i64,
    pub cache_last: i64,
    pub max_cache_num: usize,
    pub quality: f64,
}

impl PoolConfig {
    /// Validate against the target range, failing fast before any search.
    pub(crate) fn resolve(
        &self,
        gen_range: &RangeInclusive<i64>,
    ) -> Result<ResolvedConfig, PoolError> {
        let (gen_first, gen_last) = (*gen_range.start(), *gen_range.end());

        let (cache_first, cache_last) = match &self.cache_range {
            Some(range) => {
                let (first, last) = (*range.start(), *range.end());
                if first > gen_first || last < gen_last {
                    warn!(
                        "Cache range [{}, {}] does not cover target range [{}, {}]",
                        first, last, gen_first, gen_last
                    );
                    return Err(PoolError::CacheRangeTooNarrow {
                        cache_first: first,
                        cache_last: last,
                        gen_first,
                        gen_last,
                    });
                }
                (first, last)
            }
            None => {
                let m = gen_first
                    .unsigned_abs()
                    .max(gen_last.unsigned_abs())
                    .saturating_mul(2)
                    .min(i64::MAX as u64) as i64;
                (-m, m)
            }
        };

        if self.max_cache_num < 1 {
            warn!("Max cache num {} is below 1", self.max_cache_num);
            return Err(PoolError::InvalidMaxCacheNum);
        }

        if !(0.0..=1.0).contains(&self.quality) {
            warn!("Quality {} is outside [0, 1]", self.quality);
            return Err(PoolError::InvalidQuality(self.quality));
        }

        Ok(ResolvedConfig {
            cache_first,
            cache_last,
            max_cache_num: self.max_cache_num,
            quality: self.quality,
        })
    }
}
