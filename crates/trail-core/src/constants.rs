/// Trail tuning constants.
///
/// These express intended behavior (capacities, gains, cadences) and keep
/// magic numbers out of the simulation code. They are aesthetic tuning, not
/// contracts; `TrailParams` lets callers override the scalar ones.
// History ring capacity (kept smoothed positions)
pub const TRAIL_CAP: usize = 48;

// EMA gain: higher = more responsive, lower = more lag
pub const SMOOTH_K: f32 = 0.28;

// Catmull-Rom subdivisions per ring segment
pub const SPLINE_STEPS: usize = 8;

// Stroke half-width at the freshest point (px)
pub const BASE_RADIUS: f32 = 5.0;

// Hue degrees advanced per frame
pub const HUE_SPEED: f32 = 0.55;
pub const HUE_INITIAL: f32 = 200.0;

// Particle population cap and spawn cadence (one per N frames)
pub const MAX_PARTICLES: usize = 80;
pub const SPAWN_EVERY_FRAMES: u64 = 4;

// Opacity/width buckets along the trail
pub const FADE_ZONES: usize = 6;

// Pointer position before the first move event; far enough off-surface that
// nothing is visible until the user actually moves the mouse.
pub const OFFSCREEN: f32 = -300.0;

// Particle emission ranges
pub const PX_SPEED_MIN: f32 = 0.4;
pub const PX_SPEED_SPAN: f32 = 1.2;
pub const PX_LIFE_MIN: i32 = 18;
pub const PX_LIFE_SPAN: f32 = 28.0;
pub const PX_SIZE_MIN: f32 = 0.7;
pub const PX_SIZE_SPAN: f32 = 1.8;
pub const PX_HUE_JITTER: f32 = 55.0;

// Particle physics: slight upward kick at birth, constant downward pull
pub const PX_RISE_BIAS: f32 = -0.25;
pub const PX_GRAVITY: f32 = 0.035;

// Zone shaping: alpha falls off as (1 - frac)^EXP from head to tail
pub const ZONE_ALPHA_EXP: f32 = 1.8;
pub const ZONE_ALPHA_MIN: f32 = 0.01;
pub const ZONE_HUE_SWEEP: f32 = 70.0;
pub const ZONE_WIDTH_TAPER: f32 = 0.55;
