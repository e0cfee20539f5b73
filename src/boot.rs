//! WASM entry point.
//!
//! Mounts the starfield and the theme controller once the DOM is ready, wires
//! the toggle `click`, the system colour-scheme `change` and exposes
//! `initStarrySky` / `stopStarrySky` to page scripts.
//!
//! Listener closures are leaked with `forget`: they live as long as the page,
//! and each owns an `Rc` of the controller.

use std::cell::RefCell;
use std::rc::Rc;

use starfield::dom::StarrySky;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, MediaQueryListEvent, Window};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::theme::controller::ThemeController;
use crate::theme::dom::DomThemeHost;

type SharedController = Rc<RefCell<ThemeController<DomThemeHost>>>;

thread_local! {
    static SKY: RefCell<Option<Rc<StarrySky>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("nightsky: logger already installed: {err}");
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("window has no document"))?;

    if document.ready_state() != DocumentReadyState::Loading {
        boot(&window, &document);
        return Ok(());
    }
    let (ready_window, ready_document) = (window.clone(), document.clone());
    let on_ready = Closure::<dyn FnMut()>::once(move || boot(&ready_window, &ready_document));
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

/// Start (or keep running) the starfield if the page is dark.
#[wasm_bindgen(js_name = initStarrySky)]
pub fn init_starry_sky() {
    SKY.with(|slot| match slot.borrow().as_ref() {
        Some(sky) => sky.start(),
        None => log::warn!("starfield: not mounted"),
    });
}

/// Stop the starfield and hide its backdrop.
#[wasm_bindgen(js_name = stopStarrySky)]
pub fn stop_starry_sky() {
    SKY.with(|slot| {
        if let Some(sky) = slot.borrow().as_ref() {
            sky.stop();
        }
    });
}

fn boot(window: &Window, document: &Document) {
    let config = read_config(document);

    let sky = match StarrySky::mount(config.starfield.clone()) {
        Ok(sky) => Some(Rc::new(sky)),
        Err(err) => {
            log::warn!("starfield: unavailable: {err}");
            None
        }
    };
    SKY.with(|slot| *slot.borrow_mut() = sky.clone());

    let host = DomThemeHost::new(window.clone(), document.clone(), config.clone(), sky);
    let controller = Rc::new(RefCell::new(ThemeController::new(host, config.fallback_theme)));
    controller.borrow_mut().load();

    attach_toggle(document, &config, &controller);
    attach_system_listener(window, &config, &controller);
}

fn read_config(document: &Document) -> PageConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("nightsky: {err}; using defaults");
            PageConfig::default()
        }
    }
}

fn attach_toggle(document: &Document, config: &PageConfig, controller: &SharedController) {
    let Some(toggle) = document.get_element_by_id(&config.toggle_id) else {
        log::warn!("theme: toggle #{} not found", config.toggle_id);
        return;
    };
    let controller = Rc::clone(controller);
    let on_click = Closure::<dyn FnMut()>::new(move || {
        controller.borrow_mut().toggle();
    });
    match toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        Ok(()) => on_click.forget(),
        Err(err) => log::warn!("theme: cannot attach toggle listener: {err:?}"),
    }
}

fn attach_system_listener(window: &Window, config: &PageConfig, controller: &SharedController) {
    let query = match window.match_media(&config.color_scheme_query) {
        Ok(Some(query)) => query,
        Ok(None) => return,
        Err(err) => {
            log::debug!("theme: matchMedia unavailable: {err:?}");
            return;
        }
    };
    let controller = Rc::clone(controller);
    let on_change = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
        controller.borrow_mut().on_system_change(event.matches());
    });
    match query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
        Ok(()) => on_change.forget(),
        Err(err) => log::warn!("theme: cannot follow system colour scheme: {err:?}"),
    }
}
