//! Theme state machine: resolve, apply, toggle, follow the system.
//!
//! ```text
//!            toggle / system change (nothing stored)
//!   light ◀──────────────────────────────────────▶ dark
//! ```
//!
//! The initial state comes from the fallback chain: stored preference, then
//! the system colour-scheme signal, then the configured fallback.

use super::{Theme, ToggleLabel};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Side effects the controller needs from the page.
pub trait ThemeHost {
    /// Raw persisted preference, if any.
    fn stored_theme(&self) -> Option<String>;

    fn store_theme(&mut self, theme: Theme);

    /// `Some(true)` when the system prefers dark; `None` when unavailable.
    fn system_prefers_dark(&self) -> Option<bool>;

    /// Theme currently marked on the document, if any.
    fn document_theme(&self) -> Option<Theme>;

    /// Set the root theme attribute and the redundant body class.
    fn set_document_theme(&mut self, theme: Theme);

    /// Replace the toggle control's contents. Returns `false` if there is no toggle.
    fn set_toggle_label(&mut self, label: ToggleLabel) -> bool;

    fn start_starfield(&mut self);

    fn stop_starfield(&mut self);
}

/// Where the initial theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
    Fallback,
}

pub struct ThemeController<H: ThemeHost> {
    host: H,
    fallback: Theme,
}

impl<H: ThemeHost> ThemeController<H> {
    #[must_use]
    pub fn new(host: H, fallback: Theme) -> Self {
        Self { host, fallback }
    }

    /// Resolve the initial theme without applying it.
    #[must_use]
    pub fn resolve(&self) -> (Theme, ThemeSource) {
        if let Some(theme) = self.explicit_choice() {
            return (theme, ThemeSource::Stored);
        }
        match self.host.system_prefers_dark() {
            Some(true) => (Theme::Dark, ThemeSource::System),
            Some(false) => (Theme::Light, ThemeSource::System),
            None => (self.fallback, ThemeSource::Fallback),
        }
    }

    /// Resolve and apply the initial theme.
    pub fn load(&mut self) -> (Theme, ThemeSource) {
        let (theme, source) = self.resolve();
        log::debug!("theme: initial {theme} from {source:?}");
        self.apply(theme);
        (theme, source)
    }

    /// Mark the document, relabel the toggle, and start or stop the starfield.
    pub fn apply(&mut self, theme: Theme) {
        self.host.set_document_theme(theme);
        if !self.host.set_toggle_label(ToggleLabel::for_theme(theme)) {
            log::debug!("theme: no toggle control, label not updated");
        }
        if theme.is_dark() {
            self.host.start_starfield();
        } else {
            self.host.stop_starfield();
        }
        log::info!("theme applied: {theme}");
    }

    /// Flip the document's theme, persist the result, and apply it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().toggled();
        self.host.store_theme(next);
        self.apply(next);
        next
    }

    /// Follow a system colour-scheme change unless the user chose explicitly.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.explicit_choice().is_some() {
            return None;
        }
        let theme = if prefers_dark { Theme::Dark } else { Theme::Light };
        log::info!("theme: system scheme changed to {theme}");
        self.apply(theme);
        Some(theme)
    }

    /// Theme on the document; light when unmarked.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.host.document_theme().unwrap_or_default()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn explicit_choice(&self) -> Option<Theme> {
        self.host
            .stored_theme()
            .filter(|raw| !raw.is_empty())
            .map(|raw| Theme::from_stored(&raw))
    }
}
