//! Draggable glass panel over a live webcam feed, compiled to WebAssembly.
//!
//! Everything except the `wasm` module is plain Rust and runs under
//! `cargo test` on the host. The `wasm` module binds it to the page.
//!
//! | Module | Role |
//! |--------|------|
//! | [`panel`] | Phase machine composing drag and idle motion; emits [`panel::Effect`]s |
//! | [`drag`] | Drag sessions: pointer positions to panel offsets |
//! | [`motion`] | One frame of bounce-and-clamp idle motion |
//! | [`geometry`] | Points, vectors, sizes and bounds |
//! | [`presets`] | Glass intensity levels and renderer parameters |
//! | [`backgrounds`] | Background image list and shuffle |
//! | [`capability`] | User-agent capability detection |
//! | [`camera`] | Camera fallback chain |
//! | [`config`] | Page-supplied configuration |
//! | [`consts`] | Shared defaults |

pub mod backgrounds;
pub mod camera;
pub mod capability;
pub mod config;
pub mod consts;
pub mod drag;
pub mod geometry;
pub mod motion;
pub mod panel;
pub mod presets;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub use wasm::{mount, teardown};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlElement, HtmlVideoElement};

    use crate::capability;

    mod camera;
    mod dom;
    mod render;
    mod surface;

    thread_local! {
        static SURFACE: RefCell<Option<surface::SharedSurface>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn boot() {
        console_error_panic_hook::set_once();
    }

    /// Mount the glass surface on `#glass-panel`, then start the optional
    /// background column and camera feed. Mounting again replaces the
    /// previous surface, its background images and its camera stream.
    #[wasm_bindgen]
    pub fn mount() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let (config, config_err) = dom::load_config(&document);
        // A remount finds the logger already installed; only the level changes.
        if console_log::init_with_level(config.log_level()).is_err() {
            log::set_max_level(config.log_level().to_level_filter());
        }
        if let Some(err) = config_err {
            log::warn!("{err}; using defaults");
        }

        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let caps = capability::detect(&user_agent);
        log::debug!("capabilities: {caps:?}");
        let allowed = caps.supported() || !config.require_supported_browser;
        if !allowed {
            log::warn!("unsupported browser; camera disabled");
        }

        let panel = document
            .get_element_by_id("glass-panel")
            .ok_or("panel element #glass-panel not found")?
            .dyn_into::<HtmlElement>()?;
        let surface = surface::Surface::mount(window, &document, panel, &config)?;
        if let Some(previous) = SURFACE.with(|slot| slot.borrow_mut().replace(surface)) {
            surface::teardown(&previous);
        }

        if config.backgrounds {
            if let Some(container) = document.get_element_by_id("backgrounds") {
                let count = dom::populate_backgrounds(&document, &container)?;
                log::debug!("{count} backgrounds shuffled in");
            }
        }

        camera::release(&document);
        if config.camera && allowed {
            match document.get_element_by_id("camera") {
                Some(el) => camera::start(el.dyn_into::<HtmlVideoElement>()?),
                None => log::debug!("no #camera element; skipping camera"),
            }
        }
        Ok(())
    }

    /// Detach every listener, stop the animation and release the camera.
    /// The page stays as last painted.
    #[wasm_bindgen]
    pub fn teardown() {
        if let Some(surface) = SURFACE.with(|slot| slot.borrow_mut().take()) {
            surface::teardown(&surface);
        }
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            camera::release(&document);
        }
    }
}
