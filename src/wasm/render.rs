use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlElement, Window};

use crate::consts::{ANCHOR_LEFT_PCT, ANCHOR_TOP_PCT};
use crate::geometry::Size;
use crate::panel::PanelController;
use crate::presets::{GlassParams, PresetCycle};

/// Animation-frame scheduling for one surface.
///
/// A single closure is created up front and re-submitted to
/// `request_animation_frame` each time a frame is wanted, so there is never
/// more than one request in flight and the closure is never dropped while
/// the browser may still call it.
pub struct FrameLoop {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
    pending: Option<i32>,
}

impl FrameLoop {
    pub fn new(window: Window, on_frame: impl FnMut(f64) + 'static) -> Self {
        let callback = Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>);
        Self { window, callback, pending: None }
    }

    /// Ask for the next frame unless one is already requested.
    pub fn request(&mut self) -> Result<(), JsValue> {
        if self.pending.is_none() {
            let handle = self.window.request_animation_frame(self.callback.as_ref().unchecked_ref())?;
            self.pending = Some(handle);
        }
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), JsValue> {
        if let Some(handle) = self.pending.take() {
            self.window.cancel_animation_frame(handle)?;
        }
        Ok(())
    }

    /// The requested frame is running; a new request is needed for the next.
    pub fn fired(&mut self) {
        self.pending = None;
    }
}

/// Current `innerWidth` × `innerHeight`.
pub fn viewport(window: &Window) -> Size {
    let dim = |v: Result<JsValue, JsValue>| v.map_or(0.0, |js| js.as_f64().unwrap_or(0.0));
    Size::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Write offset, cursor and phase to the panel element.
pub fn paint_position(el: &HtmlElement, panel: &PanelController) -> Result<(), JsValue> {
    let pos = panel.position();
    let style = el.style();
    style.set_property("left", &format!("calc({ANCHOR_LEFT_PCT}% + {}px)", pos.x))?;
    style.set_property("top", &format!("calc({ANCHOR_TOP_PCT}% + {}px)", pos.y))?;
    style.set_property("cursor", if panel.is_dragging() { "grabbing" } else { "grab" })?;
    el.set_attribute("data-phase", panel.phase().as_str())?;
    Ok(())
}

pub fn paint_size(el: &HtmlElement, panel: &PanelController) -> Result<(), JsValue> {
    let size = panel.panel_size();
    let style = el.style();
    style.set_property("width", &format!("{}px", size.width))?;
    style.set_property("height", &format!("{}px", size.height))?;
    el.set_attribute("data-expanded", if panel.is_expanded() { "true" } else { "false" })?;
    Ok(())
}

pub fn paint_preset(el: &HtmlElement, presets: &PresetCycle) -> Result<(), JsValue> {
    let preset = presets.current();
    let filter = preset.backdrop_filter();
    let style = el.style();
    style.set_property("backdrop-filter", &filter)?;
    style.set_property("-webkit-backdrop-filter", &filter)?;
    style.set_property("border", &preset.border_css())?;
    style.set_property("box-shadow", preset.shadow)?;
    el.set_attribute("data-preset", &presets.index().to_string())?;
    Ok(())
}

pub fn paint_glass_params(el: &HtmlElement, params: &GlassParams) -> Result<(), JsValue> {
    let style = el.style();
    for (name, value) in params.css_properties() {
        style.set_property(name, &value)?;
    }
    Ok(())
}
