use crate::render;
use crate::scene::{ConnectionLine, ParticleField, PointerOffset, SceneState};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the render loop touches. The scene state is owned here and
/// mutated only from `frame`; UI handlers write the shared pointer cell.
pub struct FrameContext<'a> {
    pub scene: SceneState,
    pub lines: Vec<ConnectionLine>,
    pub rng: StdRng,
    pub pointer: Rc<RefCell<PointerOffset>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let pointer = *self.pointer.borrow();
        self.scene.tick(pointer, &mut self.rng);

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&self.scene, &self.lines) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
    line_count: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, field, line_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
