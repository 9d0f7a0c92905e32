#![cfg(target_arch = "wasm32")]
//! Cursor-trail overlay entry point.
//!
//! The host page calls [`start_trail`] after module init and keeps the
//! returned [`TrailHandle`] for teardown. On coarse-pointer (touch-only)
//! devices the effect stays dormant: no listeners, no frame loop.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

pub use frame::TrailHandle;

use frame::{EffectParts, FrameContext};
use input::PointerState;
use trail_core::{TrailParams, TrailSim};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}

/// Activate the trail on the canvas with the default id (`trail-canvas`).
#[wasm_bindgen]
pub fn start_trail() -> Result<TrailHandle, JsValue> {
    start_trail_on(constants::CANVAS_ID)
}

/// Activate the trail on a specific canvas element.
#[wasm_bindgen]
pub fn start_trail_on(canvas_id: &str) -> Result<TrailHandle, JsValue> {
    init(canvas_id).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn init(canvas_id: &str) -> anyhow::Result<TrailHandle> {
    if input::coarse_pointer() {
        log::info!("[trail] coarse pointer detected, effect disabled");
        return Ok(TrailHandle::dormant());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::lookup_canvas(&document, canvas_id)?;
    dom::style_overlay(&canvas);
    dom::sync_overlay_size(&canvas);
    let ctx = dom::context_2d(&canvas)?;

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let on_move = events::attach_pointer_move(pointer.clone());
    let on_resize = events::attach_resize(canvas.clone());

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        sim: TrailSim::new(TrailParams::default(), rand::random()),
        pointer,
        canvas,
        ctx,
        samples: Vec::new(),
    }));
    let (tick, raf_id) = frame::start_loop(frame_ctx);

    log::info!("[trail] running on #{canvas_id}");
    Ok(TrailHandle::running(EffectParts {
        on_move,
        on_resize,
        tick,
        raf_id,
    }))
}
