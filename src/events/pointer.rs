use crate::dom;
use crate::scene::{self, PointerOffset};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer as an offset from the viewport center; the render loop
/// reads the shared cell on its next tick.
pub fn wire_pointer_move(pointer: Rc<RefCell<PointerOffset>>) {
    dom::add_window_listener("mousemove", move |ev| {
        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some(window) = web::window() else {
            return;
        };
        let vw = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let vh = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        *pointer.borrow_mut() =
            scene::pointer_offset(me.client_x() as f32, me.client_y() as f32, vw, vh);
    });
}

/// Keep the canvas backing store in sync with its CSS size; the frame loop
/// picks up the new dimensions (and aspect ratio) on its next tick.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas = canvas.clone();
    dom::add_window_listener("resize", move |_| dom::sync_canvas_backing_size(&canvas));
}
