use crate::render;
use crate::schedule::{plan_frame, FrameStep};
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{FrameClock, Scene};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub clock: FrameClock,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        // The clock keeps running so the first drawn frame does not jump.
        let time = self.clock.tick();
        let size = (self.canvas.width(), self.canvas.height());
        let step = plan_frame(self.gpu.as_ref().map(|g| g.size()), size);
        let (FrameStep::Draw { resize }, Some(gpu)) = (step, self.gpu.as_mut()) else {
            return;
        };
        if let Some((width, height)) = resize {
            gpu.resize(width, height);
        }

        let mut scene = self.scene.borrow_mut();
        scene.update(time);
        match gpu.render(&scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost, reconfiguring");
                gpu.resize(size.0, size.1);
            }
            Err(e) => log::error!("[gpu] frame error: {e}"),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {e:?}");
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
