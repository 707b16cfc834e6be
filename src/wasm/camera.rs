use std::cell::Cell;

use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlVideoElement, MediaDevices, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use crate::camera::{acquire_first, CameraError, CameraStrategy, FALLBACK_CHAIN};

thread_local! {
    /// Bumped on every release. A grant that resolves under an older epoch
    /// belongs to a torn-down page and is stopped instead of shown.
    static EPOCH: Cell<u64> = const { Cell::new(0) };
}

/// Request a camera in the background and stream it into `video`.
pub fn start(video: HtmlVideoElement) {
    let epoch = EPOCH.with(Cell::get);
    wasm_bindgen_futures::spawn_local(async move {
        match acquire().await {
            Ok((strategy, stream)) if EPOCH.with(Cell::get) == epoch => {
                video.set_src_object(Some(&stream));
                log::info!("camera streaming ({strategy})");
            }
            Ok((strategy, stream)) => {
                stop_tracks(&stream);
                log::debug!("camera ({strategy}) granted after release; stopped");
            }
            Err(err) => log::error!("camera unavailable, continuing without video: {err}"),
        }
    });
}

/// Stop the stream on `#camera`, if any, and drop pending grants.
pub fn release(document: &Document) {
    EPOCH.with(|epoch| epoch.set(epoch.get() + 1));
    let Some(el) = document.get_element_by_id("camera") else {
        return;
    };
    let Some(video) = el.dyn_ref::<HtmlVideoElement>() else {
        return;
    };
    if let Some(stream) = video.src_object() {
        stop_tracks(&stream);
        video.set_src_object(None);
        log::debug!("camera released");
    }
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Some(track) = track.dyn_ref::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

async fn acquire() -> Result<(CameraStrategy, MediaStream), CameraError> {
    let window = web_sys::window().ok_or_else(|| CameraError::Unsupported("no window".to_owned()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|err| CameraError::Unsupported(describe(&err)))?;
    acquire_first(&FALLBACK_CHAIN, |s| request(devices.clone(), s)).await
}

async fn request(devices: MediaDevices, strategy: CameraStrategy) -> Result<MediaStream, String> {
    let constraints = constraints_for(strategy).map_err(|err| describe(&err))?;
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|err| describe(&err))?;
    let stream = JsFuture::from(promise).await.map_err(|err| describe(&err))?;
    stream.dyn_into::<MediaStream>().map_err(|err| describe(&err))
}

fn constraints_for(strategy: CameraStrategy) -> Result<MediaStreamConstraints, JsValue> {
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::FALSE);
    match strategy.facing_mode() {
        Some(mode) => {
            let video = Object::new();
            Reflect::set(&video, &JsValue::from_str("facingMode"), &JsValue::from_str(mode))?;
            constraints.set_video(&video);
        }
        None => constraints.set_video(&JsValue::TRUE),
    }
    Ok(constraints)
}

/// Best-effort text for a rejected promise or thrown value.
fn describe(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(e.name()), String::from(e.message()));
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
