//! Uniform Catmull-Rom interpolation over the history ring.

use crate::ring::HistoryRing;
use glam::Vec2;

/// Evaluate the uniform Catmull-Rom cubic through `p1`..`p2` at `t` in [0, 1],
/// with `p0`/`p3` as tangent neighbors. At t = 0 the curve passes exactly
/// through `p1`.
#[inline]
pub fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}

/// Regenerate the dense sample sequence for the whole ring into `out`.
///
/// `out` is cleared and reused; capacity settles after a few frames and stays
/// put. With fewer than 4 ring points there is no valid cubic segment and the
/// output is left empty (the renderer skips that frame). Each interior ring
/// point lands exactly on a sample at its segment's t = 0 boundary, so the
/// curve threads through the recorded history head to tail.
pub fn sample_ring(ring: &HistoryRing, steps: usize, out: &mut Vec<Vec2>) {
    out.clear();
    let n = ring.len();
    if n < 4 {
        return;
    }
    for i in 1..n - 2 {
        let p0 = ring.point(i - 1);
        let p1 = ring.point(i);
        let p2 = ring.point(i + 1);
        let p3 = ring.point(i + 2);
        for s in 0..steps {
            let t = s as f32 / steps as f32;
            out.push(catmull_rom(p0, p1, p2, p3, t));
        }
    }
}
