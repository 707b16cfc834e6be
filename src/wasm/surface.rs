//! Browser host for a [`PanelController`].
//!
//! Owns the panel element, the frame loop, the pending timer and every DOM
//! listener, and carries out the controller's [`Effect`]s. Callbacks hold
//! only `Weak` handles, so dropping the last `Rc` releases the whole surface.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, HtmlElement, Window};

use super::dom::{pointer_position, targets_button, Listener};
use super::render::{self, FrameLoop};
use crate::config::SurfaceConfig;
use crate::panel::{Effect, PanelController, TimerId};
use crate::presets::PresetCycle;

pub type SharedSurface = Rc<RefCell<Surface>>;

pub struct Surface {
    window: Window,
    panel_el: HtmlElement,
    controller: PanelController,
    presets: PresetCycle,
    frames: Option<FrameLoop>,
    timer: Option<(TimerId, Timeout)>,
    drag_listeners: Vec<Listener>,
    listeners: Vec<Listener>,
}

impl Surface {
    /// Bind a controller to `panel_el`, wire its inputs and start idle motion.
    pub fn mount(
        window: Window,
        document: &Document,
        panel_el: HtmlElement,
        config: &SurfaceConfig,
    ) -> Result<SharedSurface, JsValue> {
        let controller = PanelController::new(config.motion.clone(), config.panel);
        render::paint_glass_params(&panel_el, &config.glass)?;
        let shared = Rc::new(RefCell::new(Self {
            window: window.clone(),
            panel_el: panel_el.clone(),
            controller,
            presets: PresetCycle::default(),
            frames: None,
            timer: None,
            drag_listeners: Vec::new(),
            listeners: Vec::new(),
        }));

        let weak = Rc::downgrade(&shared);
        let frames = FrameLoop::new(window, move |_ts| on_frame(&weak));

        let mut listeners = Vec::new();
        for event in ["mousedown", "touchstart"] {
            let weak = Rc::downgrade(&shared);
            listeners.push(Listener::new(&panel_el, event, move |e| on_press(&weak, &e))?);
        }
        if let Some(button) = document.get_element_by_id("cycle-preset") {
            let weak = Rc::downgrade(&shared);
            listeners.push(Listener::new(&button, "click", move |_| on_cycle_preset(&weak))?);
        } else {
            log::debug!("no #cycle-preset button; preset cycling disabled");
        }
        if let Some(button) = document.get_element_by_id("toggle-expanded") {
            let weak = Rc::downgrade(&shared);
            let target = button.clone();
            listeners.push(Listener::new(&button, "click", move |_| {
                if let Some(expanded) = on_toggle_expanded(&weak) {
                    if let Err(err) = target.set_attribute("aria-pressed", if expanded { "true" } else { "false" }) {
                        log::warn!("aria-pressed not updated: {err:?}");
                    }
                }
            })?);
        }

        let effects = {
            let mut s = shared.borrow_mut();
            s.frames = Some(frames);
            s.listeners = listeners;
            render::paint_size(&s.panel_el, &s.controller)?;
            render::paint_preset(&s.panel_el, &s.presets)?;
            s.paint();
            s.controller.start()
        };
        apply(&shared, effects);
        log::info!("glass surface mounted (phase: {})", shared.borrow().controller.phase().as_str());
        Ok(shared)
    }

    fn paint(&self) {
        if let Err(err) = render::paint_position(&self.panel_el, &self.controller) {
            log::warn!("panel paint failed: {err:?}");
        }
    }
}

/// Stop all motion, timers and listeners.
pub fn teardown(shared: &SharedSurface) {
    let effects = shared.borrow_mut().controller.teardown();
    apply(shared, effects);
    let mut s = shared.borrow_mut();
    s.listeners.clear();
    s.frames = None;
    log::info!("glass surface torn down");
}

/// Carry out controller effects in order.
fn apply(shared: &SharedSurface, effects: Vec<Effect>) {
    for effect in effects {
        let result = match effect {
            Effect::RequestFrame => shared.borrow_mut().frames.as_mut().map_or(Ok(()), FrameLoop::request),
            Effect::CancelFrame => shared.borrow_mut().frames.as_mut().map_or(Ok(()), FrameLoop::cancel),
            Effect::StartTimer { id, delay_ms } => {
                let weak = Rc::downgrade(shared);
                let timeout = Timeout::new(delay_ms, move || on_timer(&weak, id));
                shared.borrow_mut().timer = Some((id, timeout));
                Ok(())
            }
            Effect::CancelTimer(id) => {
                let mut s = shared.borrow_mut();
                if s.timer.as_ref().is_some_and(|(pending, _)| *pending == id) {
                    s.timer = None;
                }
                Ok(())
            }
            Effect::AttachDragListeners => attach_drag_listeners(shared),
            Effect::DetachDragListeners => {
                shared.borrow_mut().drag_listeners.clear();
                Ok(())
            }
        };
        if let Err(err) = result {
            log::error!("{effect:?} failed: {err:?}");
        }
    }
}

fn attach_drag_listeners(shared: &SharedSurface) -> Result<(), JsValue> {
    let window = shared.borrow().window.clone();
    let mut attached = Vec::with_capacity(5);
    for event in ["mousemove", "touchmove"] {
        let weak = Rc::downgrade(shared);
        attached.push(Listener::new(&window, event, move |e| on_move(&weak, &e))?);
    }
    for event in ["mouseup", "touchend", "touchcancel"] {
        let weak = Rc::downgrade(shared);
        attached.push(Listener::new(&window, event, move |_| on_release(&weak))?);
    }
    shared.borrow_mut().drag_listeners = attached;
    Ok(())
}

// --- Callbacks ---

fn on_frame(weak: &Weak<RefCell<Surface>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let effects = {
        let mut s = shared.borrow_mut();
        if let Some(frames) = s.frames.as_mut() {
            frames.fired();
        }
        let viewport = render::viewport(&s.window);
        let effects = s.controller.on_frame(viewport);
        s.paint();
        effects
    };
    apply(&shared, effects);
}

fn on_timer(weak: &Weak<RefCell<Surface>>, id: TimerId) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let effects = {
        let mut s = shared.borrow_mut();
        if s.timer.as_ref().is_some_and(|(pending, _)| *pending == id) {
            s.timer = None;
        }
        let effects = s.controller.on_timer(id);
        s.paint();
        effects
    };
    apply(&shared, effects);
}

fn on_press(weak: &Weak<RefCell<Surface>>, event: &Event) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    if targets_button(event) {
        return;
    }
    let Some(pointer) = pointer_position(event) else {
        return;
    };
    event.prevent_default();
    let effects = {
        let mut s = shared.borrow_mut();
        let effects = s.controller.begin_drag(pointer);
        s.paint();
        effects
    };
    if !effects.is_empty() {
        log::debug!("drag started at ({}, {})", pointer.x, pointer.y);
    }
    apply(&shared, effects);
}

fn on_move(weak: &Weak<RefCell<Surface>>, event: &Event) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let Some(pointer) = pointer_position(event) else {
        return;
    };
    let mut s = shared.borrow_mut();
    if s.controller.update_drag(pointer) {
        s.paint();
    }
}

fn on_release(weak: &Weak<RefCell<Surface>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let effects = {
        let mut s = shared.borrow_mut();
        let effects = s.controller.end_drag();
        s.paint();
        effects
    };
    apply(&shared, effects);
}

fn on_cycle_preset(weak: &Weak<RefCell<Surface>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let mut s = shared.borrow_mut();
    s.presets.advance();
    log::debug!("glass preset {}", s.presets.index());
    if let Err(err) = render::paint_preset(&s.panel_el, &s.presets) {
        log::warn!("preset paint failed: {err:?}");
    }
}

fn on_toggle_expanded(weak: &Weak<RefCell<Surface>>) -> Option<bool> {
    let shared = weak.upgrade()?;
    let mut s = shared.borrow_mut();
    let expanded = !s.controller.is_expanded();
    s.controller.set_expanded(expanded);
    if let Err(err) = render::paint_size(&s.panel_el, &s.controller) {
        log::warn!("panel resize failed: {err:?}");
    }
    Some(expanded)
}
