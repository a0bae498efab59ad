use crate::camera;
use crate::detect::HandDetector;
use crate::dom;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{GestureHint, Scene, ScheduleHandle, Session, SessionCommand, StatusLabel};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub const STATUS_ID: &str = "status";
pub const HINT_ID: &str = "hint";

/// Everything the DOM callbacks and both frame loops share.
pub struct App {
    pub scene: Scene,
    pub session: Session,
    pub detector: Option<HandDetector>,
    pub video: web::HtmlVideoElement,
    document: web::Document,
    shown: Option<(StatusLabel, GestureHint)>,
}

impl App {
    pub fn new(scene: Scene, video: web::HtmlVideoElement, document: web::Document) -> Self {
        Self {
            scene,
            session: Session::new(),
            detector: None,
            video,
            document,
            shown: None,
        }
    }

    /// Push the status and hint text to the page when either changed.
    pub fn refresh_labels(&mut self) {
        let labels = (
            self.session.status(),
            self.session.hint(self.scene.gesture()),
        );
        if self.shown == Some(labels) {
            return;
        }
        dom::set_text(&self.document, STATUS_ID, labels.0.as_str());
        dom::set_text(&self.document, HINT_ID, labels.1.as_str());
        self.shown = Some(labels);
    }
}

pub fn apply_command(app: &Rc<RefCell<App>>, command: SessionCommand) {
    match command {
        SessionCommand::None => {}
        SessionCommand::ReleaseCamera => {
            let mut a = app.borrow_mut();
            camera::release(&a.video);
            a.scene.reset_input();
            log::info!("[camera] released");
        }
        SessionCommand::AcquireCamera(handle) => {
            let app = app.clone();
            spawn_local(async move { acquire(app, handle).await });
        }
    }
}

async fn acquire(app: Rc<RefCell<App>>, handle: ScheduleHandle) {
    log::info!("[camera] requesting {:?}", handle);
    let stream = match camera::request_camera().await {
        Ok(stream) => stream,
        Err(e) => {
            log::warn!("[camera] {:#}", e);
            app.borrow_mut().session.camera_denied(handle);
            return;
        }
    };
    let video = {
        let mut a = app.borrow_mut();
        if !a.session.camera_granted(handle) {
            camera::stop_tracks(&stream);
            log::info!("[camera] {:?} no longer wanted; stream stopped", handle);
            return;
        }
        a.scene.reset_input();
        a.video.clone()
    };
    if let Err(e) = camera::attach(&video, &stream).await {
        log::warn!("[camera] {:#}", e);
    }
    if app.borrow().session.is_current(handle) {
        frame::start_detection_loop(app, handle);
    }
}
