/// Rendering constants for the two-pass zone strokes and particle sprites.
// Canvas element the overlay binds to
pub const CANVAS_ID: &str = "trail-canvas";

// Non-interactive overlay above the page, composited with a screen blend
pub const OVERLAY_STYLE: &str =
    "position:fixed;inset:0;pointer-events:none;z-index:9998;mix-blend-mode:screen";

// Capability gate: touch-only devices never activate the effect
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

// Glow pass: wide, translucent, soft
pub const GLOW_ALPHA: f32 = 0.45;
pub const GLOW_WIDTH_MULT: f64 = 2.5;
pub const GLOW_BLUR: f64 = 22.0;
pub const GLOW_LIGHTNESS: f32 = 68.0;

// Core pass: narrow, bright, hue-shifted
pub const CORE_ALPHA: f32 = 0.95;
pub const CORE_WIDTH_MULT: f64 = 0.7;
pub const CORE_WIDTH_MIN: f64 = 0.8;
pub const CORE_BLUR: f64 = 6.0;
pub const CORE_HUE_SHIFT: f32 = 30.0;
pub const CORE_LIGHTNESS: f32 = 82.0;
pub const CORE_SHADOW_LIGHTNESS: f32 = 90.0;

// Particle sprites
pub const PX_ALPHA: f32 = 0.8;
pub const PX_BLUR: f64 = 6.0;
pub const PX_LIGHTNESS: f32 = 78.0;
pub const PX_SHADOW_LIGHTNESS: f32 = 75.0;
