mod controls;

use anyhow::Context;
use controls::Command;
use tree_core::gpu::{preferred_format, request_device, SceneRenderer};
use tree_core::{Camera, FrameClock, MorphState, Scene, SceneConfig, TITLE_LINES};
use winit::{
    event::*,
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

struct GpuState<'w> {
    window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: SceneRenderer,
    camera: Camera,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let (adapter, device, queue) = request_device(&instance, &surface).await?;

        let caps = surface.get_capabilities(&adapter);
        let format = preferred_format(&caps).context("surface reports no formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let renderer = SceneRenderer::new(&device, format, config.width, config.height);
        Ok(Self {
            window,
            surface,
            device,
            queue,
            camera: Camera::for_viewport(config.width, config.height),
            config,
            renderer,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, new_size.width, new_size.height);
        self.camera = Camera::for_viewport(new_size.width, new_size.height);
        log::debug!("[gpu] resized to {}x{}", new_size.width, new_size.height);
    }

    fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer
            .render(&self.device, &self.queue, &view, scene, &self.camera);
        frame.present();
        Ok(())
    }
}

fn window_title(state: MorphState) -> String {
    format!(
        "{} | {} | {} (Space: {})",
        TITLE_LINES.join(" "),
        state.status_label(),
        state.caption(),
        state.action_label()
    )
}

fn apply(
    command: Command,
    scene: &mut Scene,
    window: &Window,
    elwt: &EventLoopWindowTarget<()>,
) {
    match command {
        Command::Toggle => {
            let state = scene.toggle();
            window.set_title(&window_title(state));
        }
        Command::Quit => elwt.exit(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let seed = controls::parse_seed(std::env::var("TREE_SEED").ok().as_deref());
    let config = SceneConfig {
        seed,
        ..SceneConfig::default()
    };
    let mut scene = Scene::new(&config)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(window_title(scene.state()))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut clock = FrameClock::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(command) = controls::command_for_key(&logical_key) {
                    apply(command, &mut scene, state.window, elwt);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                if let Some(command) = controls::command_for_button(button) {
                    apply(command, &mut scene, state.window, elwt);
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            scene.update(clock.tick());
            match state.render(&scene) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost, reconfiguring");
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit()
                }
                Err(e) => log::warn!("[gpu] frame skipped: {e}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
