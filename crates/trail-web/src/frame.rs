//! requestAnimationFrame loop and the teardown handle that owns it.

use crate::input::PointerState;
use crate::render;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trail_core::constants::SPLINE_STEPS;
use trail_core::{spline, TrailSim};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub sim: TrailSim,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    /// Dense spline samples, regenerated each frame into the same buffer.
    pub samples: Vec<Vec2>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let raw = {
            let p = self.pointer.borrow();
            Vec2::new(p.x, p.y)
        };
        self.sim.step(raw);
        spline::sample_ring(self.sim.ring(), SPLINE_STEPS, &mut self.samples);
        render::paint(&self.ctx, &self.canvas, &self.samples, &self.sim);
    }
}

/// Everything teardown has to undo: the two window listeners, the tick
/// closure that keeps the loop alive, and the id of the pending frame.
pub struct EffectParts {
    pub on_move: Closure<dyn FnMut(web::PointerEvent)>,
    pub on_resize: Closure<dyn FnMut()>,
    pub tick: TickSlot,
    pub raf_id: Rc<Cell<i32>>,
}

/// Owner-facing stop handle. `stop` is idempotent: the parts are taken out on
/// the first call and later calls find nothing to do.
#[wasm_bindgen]
pub struct TrailHandle {
    parts: Rc<RefCell<Option<EffectParts>>>,
}

#[wasm_bindgen]
impl TrailHandle {
    /// Cancel the pending frame, detach both listeners, and break the loop's
    /// self-reference so no further tick can be scheduled.
    pub fn stop(&self) {
        let Some(parts) = self.parts.borrow_mut().take() else {
            return;
        };
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(parts.raf_id.get());
            _ = w.remove_event_listener_with_callback(
                "pointermove",
                parts.on_move.as_ref().unchecked_ref(),
            );
            _ = w.remove_event_listener_with_callback(
                "resize",
                parts.on_resize.as_ref().unchecked_ref(),
            );
        }
        parts.tick.borrow_mut().take();
        log::info!("[trail] stopped");
    }

    pub fn is_running(&self) -> bool {
        self.parts.borrow().is_some()
    }
}

impl TrailHandle {
    pub fn running(parts: EffectParts) -> Self {
        Self {
            parts: Rc::new(RefCell::new(Some(parts))),
        }
    }

    /// Handle for a gated-off (coarse pointer) effect; `stop` is a no-op.
    pub fn dormant() -> Self {
        Self {
            parts: Rc::new(RefCell::new(None)),
        }
    }
}

/// Start the self-rescheduling frame loop. Each tick re-requests the next
/// frame at the top of the call and records its id so cancellation always
/// targets the pending frame. Returns the tick slot and id cell for the
/// teardown handle.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> (TickSlot, Rc<Cell<i32>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(0));
    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let slot = tick_clone.borrow();
            // emptied slot means teardown already ran
            let Some(cb) = slot.as_ref() else { return };
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_clone.set(id);
                }
            }
        }
        frame_ctx.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }
    (tick, raf_id)
}
