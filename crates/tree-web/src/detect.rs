//! Bridge to the host page's hand landmarker.
//!
//! The page provides `window.loadHandDetector()`, resolving to an object with
//! `detectForVideo(video, timestampMs)` that returns
//! `{ landmarks: [[{ x, y, z } x 21], ...] }` (the MediaPipe result shape).

use glam::Vec3;
use js_sys::{Array, Reflect};
use tree_core::{parse_hands, Hands};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    pub type HandDetector;

    #[wasm_bindgen(method, catch, js_name = detectForVideo)]
    fn detect_for_video(
        this: &HandDetector,
        video: &web::HtmlVideoElement,
        timestamp_ms: f64,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = window, js_name = loadHandDetector)]
    fn load_hand_detector() -> Result<js_sys::Promise, JsValue>;
}

pub async fn load() -> anyhow::Result<HandDetector> {
    let promise = load_hand_detector().map_err(|e| anyhow::anyhow!("loadHandDetector: {:?}", e))?;
    let detector = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("detector load failed: {:?}", e))?;
    if detector.is_null() || detector.is_undefined() {
        anyhow::bail!("loadHandDetector resolved to nothing");
    }
    Ok(detector.unchecked_into())
}

pub fn detect(
    detector: &HandDetector,
    video: &web::HtmlVideoElement,
    timestamp_ms: f64,
) -> anyhow::Result<Hands> {
    let result = detector
        .detect_for_video(video, timestamp_ms)
        .map_err(|e| anyhow::anyhow!("detectForVideo: {:?}", e))?;
    Ok(parse_result(&result))
}

fn parse_result(result: &JsValue) -> Hands {
    let landmarks = Reflect::get(result, &"landmarks".into()).unwrap_or(JsValue::UNDEFINED);
    if !Array::is_array(&landmarks) {
        return Hands::new();
    }
    let raw = Array::from(&landmarks)
        .iter()
        .map(|hand| {
            if Array::is_array(&hand) {
                Array::from(&hand).iter().map(|p| point(&p)).collect()
            } else {
                Vec::new()
            }
        })
        .collect::<Vec<Vec<Vec3>>>();
    parse_hands(&raw)
}

// missing or non-numeric coordinates become NaN and fail validation
fn point(value: &JsValue) -> Vec3 {
    let coord = |key: &str| {
        Reflect::get(value, &key.into())
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::NAN) as f32
    };
    Vec3::new(coord("x"), coord("y"), coord("z"))
}
