use crate::constants::COARSE_POINTER_QUERY;
use trail_core::constants::OFFSCREEN;
use web_sys as web;

/// Latest raw pointer position, last-write-wins. Written only by the
/// pointer-move handler, read only by the frame tick; starts off-screen so
/// the trail stays invisible until the first movement.
#[derive(Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: OFFSCREEN,
            y: OFFSCREEN,
        }
    }
}

/// Probed once at startup; not re-evaluated live.
pub fn coarse_pointer() -> bool {
    web::window()
        .and_then(|w| w.match_media(COARSE_POINTER_QUERY).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}
