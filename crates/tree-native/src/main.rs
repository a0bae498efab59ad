use std::time::Instant;
use tree_core::gpu::PointPipeline;
use tree_core::{GestureState, PointInstance, Scene, SceneParams, Uniforms};
use winit::{
    event::*,
    event_loop::{EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

const PIXELS_PER_LINE: f64 = 40.0;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointPipeline,
    instances: Vec<PointInstance>,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, capacity: usize) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let points = PointPipeline::new(&device, format, capacity);
        log::info!("[gpu] {:?} {}x{}", format, config.width, config.height);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            width: config.width,
            height: config.height,
            config,
            points,
            instances: Vec::with_capacity(capacity),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let uniforms = Uniforms::from_camera(&scene.camera(aspect));
        scene.write_instances(&mut self.instances);
        self.points
            .render(&self.device, &self.queue, &view, &uniforms, &self.instances);
        frame.present();
        Ok(())
    }
}

/// `TREE_PARTICLES` and `TREE_SEED` override the scene defaults.
fn scene_params_from_env() -> SceneParams {
    let mut params = SceneParams::default();
    if let Ok(raw) = std::env::var("TREE_PARTICLES") {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => params.particle_count = n,
            _ => log::warn!("[scene] ignoring TREE_PARTICLES={:?}", raw),
        }
    }
    if let Ok(raw) = std::env::var("TREE_SEED") {
        match raw.trim().parse::<u64>() {
            Ok(seed) => params.seed = Some(seed),
            Err(_) => log::warn!("[scene] ignoring TREE_SEED={:?}", raw),
        }
    }
    params
}

/// Keyboard stand-ins for the hand poses: hold H for the heart, Space to
/// explode; releasing either reassembles.
fn handle_key(
    scene: &mut Scene,
    code: KeyCode,
    state: ElementState,
    elwt: &EventLoopWindowTarget<()>,
) {
    let pressed = state == ElementState::Pressed;
    match code {
        KeyCode::KeyH if pressed => scene.set_gesture(GestureState::HeartShape),
        KeyCode::Space if pressed => scene.set_gesture(GestureState::HandOpen),
        KeyCode::KeyH | KeyCode::Space => scene.set_gesture(GestureState::HandClosed),
        KeyCode::Escape if pressed => elwt.exit(),
        _ => {}
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut scene = Scene::new(scene_params_from_env())?;
    scene.set_gesture(GestureState::HandClosed);
    log::info!("[input] drag to rotate, wheel to zoom, hold Space to explode, hold H for the heart");

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Gesture Tree (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, scene.max_instances()))?;
    let start = Instant::now();
    let mut last = start;
    let mut cursor_x = 0.0_f32;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                cursor_x = position.x as f32;
                scene.pointer_move(cursor_x);
            }
            WindowEvent::CursorLeft { .. } => scene.pointer_release(),
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => scene.pointer_press(cursor_x),
                ElementState::Released => scene.pointer_release(),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => (p.y / PIXELS_PER_LINE) as f32,
                };
                scene.wheel(lines);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        repeat: false,
                        ..
                    },
                ..
            } => handle_key(&mut scene, code, key_state, elwt),
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last).as_secs_f32();
            last = now;
            let outcome = scene.tick(start.elapsed().as_secs_f32(), dt);
            if outcome.burst {
                log::debug!("[scene] burst");
            }
            match state.render(&scene) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
