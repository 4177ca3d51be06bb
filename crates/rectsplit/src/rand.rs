//! Random rectangle partitions (seeded, replayable).
//!
//! Model
//! - Start from one rectangle and apply `splits` random valid cuts, each on a
//!   uniformly chosen element and axis. Cuts are strictly interior unless
//!   `allow_empty` is set, in which case `0` and the full extent are allowed.
//! - Every cut is recorded as a `SplitStep`, so a sample can be rebuilt
//!   without the RNG (`regenerate`) or folded back into its base (`collapse`).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::rectangle::{Axis, Rectangle};
use crate::rectangles::Rectangles;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PartitionCfg {
    /// Number of cuts to attempt. Elements too thin to cut are skipped.
    pub splits: usize,
    /// Allow cuts at `0` and at the full extent (zero-sized parts).
    pub allow_empty: bool,
}

impl Default for PartitionCfg {
    fn default() -> Self {
        Self {
            splits: 8,
            allow_empty: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One recorded `Rectangles::split` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitStep {
    pub index: usize,
    pub cut: i32,
    pub axis: Axis,
}

#[derive(Clone, Debug)]
pub struct PartitionSample {
    pub base: Rectangle,
    pub rects: Rectangles,
    pub steps: Vec<SplitStep>,
    pub token: ReplayToken,
}

/// Draw a random partition of `base`.
pub fn draw_partition(
    base: Rectangle,
    cfg: PartitionCfg,
    tok: ReplayToken,
) -> Result<PartitionSample> {
    let mut rng = tok.to_std_rng();
    let mut rects = Rectangles::from(vec![base]);
    let mut steps = Vec::with_capacity(cfg.splits);
    for _ in 0..cfg.splits {
        let index = rng.gen_range(0..rects.size());
        let first = if rng.gen::<bool>() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        let r = rects[index];
        let Some((axis, extent)) = [first, other(first)]
            .into_iter()
            .map(|a| (a, extent_along(&r, a)))
            .find(|&(_, e)| cfg.allow_empty || e >= 2)
        else {
            continue;
        };
        let cut = if cfg.allow_empty {
            rng.gen_range(0..=extent)
        } else {
            rng.gen_range(1..extent)
        };
        rects.split(index, cut, axis)?;
        steps.push(SplitStep { index, cut, axis });
    }
    Ok(PartitionSample {
        base,
        rects,
        steps,
        token: tok,
    })
}

/// Rebuild `sample.rects` from its base and recorded steps.
pub fn regenerate(sample: &PartitionSample) -> Result<Rectangles> {
    let mut rects = Rectangles::from(vec![sample.base]);
    for s in &sample.steps {
        rects.split(s.index, s.cut, s.axis)?;
    }
    Ok(rects)
}

/// Undo `steps` in reverse order by merging each split pair back together.
pub fn collapse(mut rects: Rectangles, steps: &[SplitStep]) -> Result<Rectangles> {
    for s in steps.iter().rev() {
        rects.merge_adjacent(s.index, s.axis)?;
    }
    Ok(rects)
}

fn other(axis: Axis) -> Axis {
    match axis {
        Axis::Horizontal => Axis::Vertical,
        Axis::Vertical => Axis::Horizontal,
    }
}

fn extent_along(r: &Rectangle, axis: Axis) -> i32 {
    match axis {
        Axis::Horizontal => r.height(),
        Axis::Vertical => r.width(),
    }
}
