#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod api;
mod constants;
mod dom;
mod events;
mod frame;
mod modal;
mod render;
mod scene;
mod voiceover;

use constants::{LINE_COUNT, PARTICLE_COUNT};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gaia-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::require_element(&document, "consciousness-canvas")?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    // Pointer offsets feed the camera parallax on the next tick
    let pointer = Rc::new(RefCell::new(scene::PointerOffset::default()));
    events::wire_pointer_move(pointer.clone());

    events::wire_listen_button(&document)?;
    events::wire_modal(&document)?;
    events::wire_email_form(&document)?;
    events::wire_scroll_effects(&document)?;

    let mut rng = StdRng::from_entropy();
    let field = scene::generate_particles(&mut rng, PARTICLE_COUNT);
    let lines = scene::generate_lines(&mut rng, LINE_COUNT);
    log::info!(
        "scene ready: {} particles, {} lines",
        field.len(),
        lines.len()
    );

    // UI wiring above stays live even if WebGPU is unavailable
    let gpu = frame::init_gpu(&canvas, &field, lines.len()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene::SceneState::new(lines.len()),
        lines,
        rng,
        pointer,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
