#![cfg(target_arch = "wasm32")]
mod app;
mod camera;
mod detect;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use app::{apply_command, App};
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::Scene;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub const CANVAS_ID: &str = "tree-canvas";
pub const VIDEO_ID: &str = "tree-video";

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
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::element::<web::HtmlCanvasElement>(&document, CANVAS_ID)?;
    events::wire_canvas_resize(&canvas);

    let video = match dom::element::<web::HtmlVideoElement>(&document, VIDEO_ID) {
        Ok(video) => video,
        Err(_) => dom::hidden_video(&document)?,
    };

    let scene = Scene::new(dom::scene_params(&window))?;
    let capacity = scene.max_instances();
    let app = Rc::new(RefCell::new(App::new(scene, video, document.clone())));
    app.borrow_mut().refresh_labels();

    events::wire_controls(&document, &app);
    events::wire_pointer(&canvas, &app);
    load_detector(app.clone());

    let gpu = match render::GpuState::new(&canvas, capacity).await {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    };
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(
        app, gpu, canvas,
    ))));
    Ok(())
}

fn load_detector(app: Rc<RefCell<App>>) {
    spawn_local(async move {
        let command = match detect::load().await {
            Ok(detector) => {
                log::info!("[detect] hand detector ready");
                let mut a = app.borrow_mut();
                a.detector = Some(detector);
                a.session.detector_ready()
            }
            Err(e) => {
                log::warn!("[detect] {:#}; pointer input only", e);
                app.borrow_mut().session.detector_failed()
            }
        };
        apply_command(&app, command);
    });
}
