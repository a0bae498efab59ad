use crate::app::{apply_command, App};
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::SessionCommand;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const START_BUTTON_ID: &str = "start-button";
pub const GESTURE_TOGGLE_ID: &str = "gesture-toggle";
pub const PARTICLE_COUNT_ID: &str = "particle-count";

fn listen<E: JsCast + 'static>(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn dispatch(app: &Rc<RefCell<App>>, f: impl FnOnce(&mut App) -> SessionCommand) {
    let command = f(&mut app.borrow_mut());
    apply_command(app, command);
}

/// Start button, gesture toggle and particle count input. Each one is
/// optional on the page.
pub fn wire_controls(document: &web::Document, app: &Rc<RefCell<App>>) {
    if let Ok(button) = dom::element::<web::HtmlElement>(document, START_BUTTON_ID) {
        let app = app.clone();
        let target = button.clone();
        listen(&button, "click", move |_: web::MouseEvent| {
            log::info!("[session] start");
            dispatch(&app, |a| a.session.set_started(true));
            _ = target.set_attribute("hidden", "");
        });
    }

    if let Ok(toggle) = dom::element::<web::HtmlInputElement>(document, GESTURE_TOGGLE_ID) {
        let app = app.clone();
        let toggle_c = toggle.clone();
        listen(&toggle, "change", move |_: web::Event| {
            let enabled = toggle_c.checked();
            log::info!("[session] gesture control {}", if enabled { "on" } else { "off" });
            dispatch(&app, |a| {
                a.scene.reset_input();
                a.session.set_gesture_enabled(enabled)
            });
        });
    }

    if let Ok(slider) = dom::element::<web::HtmlInputElement>(document, PARTICLE_COUNT_ID) {
        let app = app.clone();
        let slider_c = slider.clone();
        listen(&slider, "change", move |_: web::Event| {
            match slider_c.value().trim().parse::<usize>() {
                Ok(count) => {
                    if let Err(e) = app.borrow_mut().scene.set_particle_count(count) {
                        log::warn!("[scene] {}", e);
                    }
                }
                Err(_) => log::warn!("[scene] bad particle count {:?}", slider_c.value()),
            }
        });
    }
}

/// Pointer and wheel fallback. Ignored while the hand detector drives input.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<App>>) {
    {
        let app = app.clone();
        let canvas_c = canvas.clone();
        listen(canvas, "pointerdown", move |ev: web::PointerEvent| {
            let mut a = app.borrow_mut();
            if a.session.gesture_input_active() {
                return;
            }
            _ = canvas_c.set_pointer_capture(ev.pointer_id());
            a.scene.pointer_press(input::pointer_css_x(&ev, &canvas_c));
        });
    }
    {
        let app = app.clone();
        let canvas_c = canvas.clone();
        listen(canvas, "pointermove", move |ev: web::PointerEvent| {
            let mut a = app.borrow_mut();
            if a.session.gesture_input_active() {
                return;
            }
            a.scene.pointer_move(input::pointer_css_x(&ev, &canvas_c));
        });
    }
    for kind in ["pointerup", "pointercancel", "pointerleave"] {
        let app = app.clone();
        listen(canvas, kind, move |_: web::PointerEvent| {
            let mut a = app.borrow_mut();
            if !a.session.gesture_input_active() {
                a.scene.pointer_release();
            }
        });
    }
    {
        let app = app.clone();
        listen(canvas, "wheel", move |ev: web::WheelEvent| {
            let mut a = app.borrow_mut();
            if a.session.gesture_input_active() {
                return;
            }
            ev.prevent_default();
            a.scene.wheel(input::wheel_lines(&ev));
        });
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    if let Some(window) = web::window() {
        let canvas = canvas.clone();
        listen(&window, "resize", move |_: web::Event| {
            dom::sync_canvas_backing_size(&canvas);
        });
    }
}
