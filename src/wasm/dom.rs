use rand::RngCore;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlImageElement, MouseEvent, TouchEvent};

use crate::backgrounds::{background_urls, shuffled};
use crate::config::{ConfigError, SurfaceConfig};
use crate::geometry::Point;

/// An attached DOM event listener. Dropping it removes the listener.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach {} listener: {err:?}", self.event);
        }
    }
}

/// Client coordinates of a mouse event or of the first touch point.
///
/// `touchend` carries no active touches and yields `None`.
pub fn pointer_position(event: &Event) -> Option<Point> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())));
    }
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Whether the event started on a button inside the panel.
pub fn targets_button(event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_ref::<Element>().cloned())
        .is_some_and(|el| matches!(el.closest("button"), Ok(Some(_))))
}

/// Read the optional `#glass-config` JSON block. A broken block is reported
/// and replaced by defaults.
pub fn load_config(document: &Document) -> (SurfaceConfig, Option<ConfigError>) {
    let text = document
        .get_element_by_id("glass-config")
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    match SurfaceConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(err) => (SurfaceConfig::default(), Some(err)),
    }
}

/// `Math.random` as a `rand` generator. Not cryptographic; only used to
/// order background images.
pub struct MathRandom;

impl RngCore for MathRandom {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next_u32(&mut self) -> u32 {
        (js_sys::Math::random() * 4_294_967_296.0) as u32
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Replace the contents of `container` with the background images in a
/// fresh random order.
pub fn populate_backgrounds(document: &Document, container: &Element) -> Result<usize, JsValue> {
    container.set_inner_html("");
    let urls = shuffled(&background_urls(), &mut MathRandom);
    for (i, src) in urls.iter().enumerate() {
        let img = document.create_element("img")?.dyn_into::<HtmlImageElement>()?;
        img.set_src(src);
        img.set_alt(&format!("Background {}", i + 1));
        img.class_list().add_1("background")?;
        container.append_child(&img)?;
    }
    Ok(urls.len())
}
