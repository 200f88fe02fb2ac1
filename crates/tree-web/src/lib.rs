#![cfg(target_arch = "wasm32")]
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod schedule;

use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{FrameClock, Scene, SceneConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas = canvas.clone();
        dom::add_resize_listener(move || dom::sync_canvas_backing_size(&canvas));
    }

    let scene = Rc::new(RefCell::new(Scene::new(&SceneConfig::default())?));
    overlay::init(&document);
    overlay::sync(&document, scene.borrow().state());
    events::wire_toggle(&document, scene.clone());

    // The loop starts before the GPU is ready; frames are skipped until then.
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        clock: FrameClock::new(),
        canvas: canvas.clone(),
        gpu: None,
    }));
    frame::start_loop(frame_ctx.clone());

    let gpu = frame::init_gpu(&canvas).await;
    frame_ctx.borrow_mut().gpu = gpu;
    Ok(())
}
