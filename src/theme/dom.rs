//! Browser host for the theme controller.
//!
//! Reads and writes `localStorage`, marks `<html>` and `<body>`, relabels the
//! toggle button and forwards start/stop to the page's [`StarrySky`]. Every
//! element is optional; missing ones are skipped.

use std::rc::Rc;

use starfield::dom::StarrySky;
use web_sys::{Document, Storage, Window};

use super::controller::ThemeHost;
use super::{Theme, ToggleLabel};
use crate::config::PageConfig;

pub struct DomThemeHost {
    window: Window,
    document: Document,
    config: PageConfig,
    sky: Option<Rc<StarrySky>>,
}

impl DomThemeHost {
    #[must_use]
    pub fn new(window: Window, document: Document, config: PageConfig, sky: Option<Rc<StarrySky>>) -> Self {
        Self { window, document, config, sky }
    }

    fn storage(&self) -> Option<Storage> {
        match self.window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("theme: localStorage unavailable: {err:?}");
                None
            }
        }
    }
}

impl ThemeHost for DomThemeHost {
    fn stored_theme(&self) -> Option<String> {
        let storage = self.storage()?;
        match storage.get_item(&self.config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: cannot read preference: {err:?}");
                None
            }
        }
    }

    fn store_theme(&mut self, theme: Theme) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(err) = storage.set_item(&self.config.storage_key, theme.as_str()) {
            log::warn!("theme: cannot persist preference: {err:?}");
        }
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        match self.window.match_media(&self.config.color_scheme_query) {
            Ok(query) => query.map(|query| query.matches()),
            Err(err) => {
                log::debug!("theme: matchMedia unavailable: {err:?}");
                None
            }
        }
    }

    fn document_theme(&self) -> Option<Theme> {
        let root = self.document.document_element()?;
        let value = root.get_attribute(&self.config.starfield.surface.theme_attribute)?;
        Some(Theme::from_stored(&value))
    }

    fn set_document_theme(&mut self, theme: Theme) {
        let surface = &self.config.starfield.surface;
        if let Some(root) = self.document.document_element() {
            if let Err(err) = root.set_attribute(&surface.theme_attribute, theme.as_str()) {
                log::warn!("theme: cannot set {}: {err:?}", surface.theme_attribute);
            }
        }
        if let Some(body) = self.document.body() {
            let classes = body.class_list();
            let marked =
                if theme.is_dark() { classes.add_1(&surface.dark_class) } else { classes.remove_1(&surface.dark_class) };
            if let Err(err) = marked {
                log::warn!("theme: cannot update body class: {err:?}");
            }
        }
    }

    fn set_toggle_label(&mut self, label: ToggleLabel) -> bool {
        let Some(toggle) = self.document.get_element_by_id(&self.config.toggle_id) else {
            return false;
        };
        toggle.set_inner_html(&label.to_html());
        true
    }

    fn start_starfield(&mut self) {
        match &self.sky {
            Some(sky) => sky.start(),
            None => log::debug!("theme: no starfield mounted"),
        }
    }

    fn stop_starfield(&mut self) {
        if let Some(sky) = &self.sky {
            sky.stop();
        }
    }
}
