use crate::app::App;
use crate::detect;
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::ScheduleHandle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

pub struct FrameContext {
    pub app: Rc<RefCell<App>>,
    pub gpu: Option<GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub started_at: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(app: Rc<RefCell<App>>, gpu: Option<GpuState>, canvas: web::HtmlCanvasElement) -> Self {
        let now = Instant::now();
        Self {
            app,
            gpu,
            canvas,
            started_at: now,
            last_instant: now,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started_at).as_secs_f32();

        let mut app = self.app.borrow_mut();
        let outcome = app.scene.tick(elapsed, dt);
        if outcome.burst {
            log::debug!("[frame] burst at t={:.2}", elapsed);
        }
        app.refresh_labels();

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            match gpu.render(&app.scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory; rendering stopped");
                    self.gpu = None;
                }
                Err(e) => log::warn!("[gpu] {:?}", e),
            }
        }
    }
}

fn request_frame(f: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), f.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

/// Run detection once per new video frame until `handle` goes stale.
pub fn start_detection_loop(app: Rc<RefCell<App>>, handle: ScheduleHandle) {
    log::info!("[detect] loop {:?} started", handle);
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !detect_once(&app, handle) {
            log::info!("[detect] loop {:?} stopped", handle);
            // freed once this call returns
            let _ = tick_clone.borrow_mut().take();
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

/// One detection step; false once the loop should end.
fn detect_once(app: &Rc<RefCell<App>>, handle: ScheduleHandle) -> bool {
    let mut guard = app.borrow_mut();
    let app = &mut *guard;
    if !app.session.is_current(handle) {
        return false;
    }
    if app.video.ready_state() < HAVE_CURRENT_DATA {
        return true;
    }
    if !app.session.accept_frame(handle, app.video.current_time()) {
        return true;
    }
    let Some(detector) = app.detector.as_ref() else {
        return true;
    };
    match detect::detect(detector, &app.video, js_sys::Date::now()) {
        Ok(hands) => {
            app.scene.ingest_hands(&hands);
        }
        Err(e) => log::warn!("[detect] {:#}", e),
    }
    true
}
