use js_sys::Reflect;
use tree_core::SceneParams;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Look up `#id` and cast it to the expected element type.
pub fn element<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong type: {:?}", id, e))
}

/// Offscreen video element used as the detector's frame source.
pub fn hidden_video(document: &web::Document) -> anyhow::Result<web::HtmlVideoElement> {
    let video = document
        .create_element("video")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlVideoElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = video.set_attribute("playsinline", "");
    _ = video.set_attribute("style", "display:none");
    video.set_muted(true);
    video.set_autoplay(true);
    if let Some(body) = document.body() {
        _ = body.append_child(&video);
    }
    Ok(video)
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Scene parameters from the optional `window.treeOptions` object
/// (`{ particleCount, seed }`); anything missing or invalid keeps its default.
pub fn scene_params(window: &web::Window) -> SceneParams {
    let mut params = SceneParams::default();
    let options = match Reflect::get(window, &JsValue::from_str("treeOptions")) {
        Ok(v) if v.is_object() => v,
        _ => return params,
    };
    let number = |key: &str| {
        Reflect::get(&options, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|n| n.is_finite() && *n >= 0.0)
    };
    match number("particleCount") {
        Some(n) if n >= 1.0 => params.particle_count = n as usize,
        Some(n) => log::warn!("[scene] ignoring particleCount {}", n),
        None => {}
    }
    if let Some(seed) = number("seed") {
        params.seed = Some(seed as u64);
    }
    params
}
