//! Window listener wiring. Unlike fire-and-forget closures, these are
//! returned to the caller so teardown can remove the listeners and drop them.

use crate::dom;
use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a window pointer-move listener that overwrites the shared raw
/// position. No filtering, no buffering; rendering is driven by the frame
/// tick, never by input events.
pub fn attach_pointer_move(
    pointer: Rc<RefCell<PointerState>>,
) -> Closure<dyn FnMut(web::PointerEvent)> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut p = pointer.borrow_mut();
        p.x = ev.client_x() as f32;
        p.y = ev.client_y() as f32;
    }) as Box<dyn FnMut(web::PointerEvent)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure
}

/// Attach a window resize listener that resynchronizes the canvas backing
/// size to the viewport.
pub fn attach_resize(canvas: web::HtmlCanvasElement) -> Closure<dyn FnMut()> {
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_overlay_size(&canvas);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure
}
