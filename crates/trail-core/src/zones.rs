//! Fade-zone planning: splitting the dense spline sequence into head-to-tail
//! buckets that each get one opacity/width/hue treatment.
//!
//! Planning always yields the full partition of `[0, total)` so the coverage
//! invariant holds; the renderer consults [`Zone::visible`] to skip the
//! buckets not worth a draw call.

use crate::constants::{ZONE_ALPHA_EXP, ZONE_ALPHA_MIN, ZONE_HUE_SWEEP, ZONE_WIDTH_TAPER};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct Zone {
    /// Half-open sample index range [start, end).
    pub start: usize,
    pub end: usize,
    /// Head zone is 1.0; falls off as (1 - frac)^1.8 toward the tail.
    pub alpha: f32,
    /// Degrees to add to the frame hue; grows with distance from the head.
    pub hue_offset: f32,
    /// Full stroke width for the core pass at this zone.
    pub width: f32,
}

impl Zone {
    /// Worth painting: non-empty range and alpha above the cutoff.
    #[inline]
    pub fn visible(&self) -> bool {
        self.end > self.start && self.alpha >= ZONE_ALPHA_MIN
    }
}

pub type ZonePlan = SmallVec<[Zone; 8]>;

/// Partition `total` dense samples into `zone_count` equal-fraction buckets,
/// ordered freshest first. Adjacent zones share a boundary sample when drawn
/// (the painter extends each path one index past `end`) but the index ranges
/// themselves tile `[0, total)` exactly once.
pub fn plan_zones(total: usize, zone_count: usize, base_radius: f32) -> ZonePlan {
    let mut plan = ZonePlan::new();
    if zone_count == 0 {
        return plan;
    }
    for z in 0..zone_count {
        let frac0 = z as f32 / zone_count as f32;
        let frac1 = (z + 1) as f32 / zone_count as f32;
        plan.push(Zone {
            start: (frac0 * total as f32).floor() as usize,
            end: ((frac1 * total as f32).floor() as usize).min(total),
            alpha: (1.0 - frac0).powf(ZONE_ALPHA_EXP),
            hue_offset: frac0 * ZONE_HUE_SWEEP,
            width: base_radius * 2.0 * (1.0 - frac0 * ZONE_WIDTH_TAPER),
        });
    }
    plan
}
