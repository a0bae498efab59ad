//! Webcam capture for the detector.

use js_sys::{Object, Reflect};
use tree_core::{VIDEO_HEIGHT, VIDEO_WIDTH};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Ask for a 640x480 user-facing video stream.
pub async fn request_camera() -> anyhow::Result<web::MediaStream> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow::anyhow!("media devices unavailable: {:?}", e))?;

    let video = Object::new();
    _ = Reflect::set(&video, &"width".into(), &JsValue::from(VIDEO_WIDTH));
    _ = Reflect::set(&video, &"height".into(), &JsValue::from(VIDEO_HEIGHT));
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video);
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow::anyhow!("getUserMedia: {:?}", e))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("camera denied: {:?}", e))?;
    stream
        .dyn_into::<web::MediaStream>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Route `stream` into `video` and start playback.
pub async fn attach(video: &web::HtmlVideoElement, stream: &web::MediaStream) -> anyhow::Result<()> {
    video.set_src_object(Some(stream));
    let playing = video.play().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(playing)
        .await
        .map_err(|e| anyhow::anyhow!("video play: {:?}", e))?;
    Ok(())
}

pub fn stop_tracks(stream: &web::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Stop every track feeding `video` and detach it.
pub fn release(video: &web::HtmlVideoElement) {
    if let Some(stream) = video.src_object() {
        stop_tracks(&stream);
    }
    video.set_src_object(None);
}
