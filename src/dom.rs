use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up a required page element; a missing one fails initialization.
pub fn require_element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))
}

pub fn add_event_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_click_listener(target: &web::EventTarget, handler: impl FnMut(web::Event) + 'static) {
    add_event_listener(target, "click", handler);
}

pub fn add_window_listener(event: &str, mut handler: impl FnMut(web::Event) + 'static) {
    if let Some(window) = web::window() {
        let closure =
            Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Maintain the canvas backing store at CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Schedule a one-shot callback; the returned handle can cancel it.
pub fn set_timeout(handler: impl FnOnce() + 'static, delay_ms: i32) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(handler);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .ok()
}

pub fn clear_timeout(handle: i32) {
    if let Some(window) = web::window() {
        window.clear_timeout_with_handle(handle);
    }
}
