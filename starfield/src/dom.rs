//! Browser host for the animator.
//!
//! [`DomSurface`] implements [`AnimationHost`] on top of the live document:
//! elements are looked up by id on every call, so a backdrop that appears
//! after startup is picked up by the next `start`. [`StarrySky`] owns the
//! animator, the `requestAnimationFrame` callback and the debounced window
//! `resize` listener.
//!
//! All callbacks hold `Weak` references; dropping the [`StarrySky`] ends the
//! frame chain and detaches the resize listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

use crate::animator::{AnimationHost, Animator, FrameHandle};
use crate::config::{StarfieldConfig, SurfaceConfig};
use crate::debounce::Debouncer;
use crate::error::{SurfaceError, js_message};
use crate::field::Viewport;

type SharedAnimator = Rc<RefCell<Animator<DomSurface>>>;

pub struct DomSurface {
    window: Window,
    document: Document,
    surface: SurfaceConfig,
    on_frame: Option<Closure<dyn FnMut(f64)>>,
}

impl DomSurface {
    /// Bind to the global window and document.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NoWindow`] or [`SurfaceError::NoDocument`]
    /// outside a browser page.
    pub fn new(surface: SurfaceConfig) -> Result<Self, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let document = window.document().ok_or(SurfaceError::NoDocument)?;
        Ok(Self { window, document, surface, on_frame: None })
    }

    fn backdrop(&self) -> Result<HtmlElement, SurfaceError> {
        let id = &self.surface.backdrop_id;
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::MissingElement(id.clone()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SurfaceError::WrongElement { id: id.clone(), expected: "HTML element" })
    }

    fn canvas(&self) -> Result<HtmlCanvasElement, SurfaceError> {
        let id = &self.surface.canvas_id;
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::MissingElement(id.clone()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::WrongElement { id: id.clone(), expected: "canvas" })
    }
}

impl AnimationHost for DomSurface {
    type Painter = CanvasRenderingContext2d;

    fn is_dark(&self) -> bool {
        let by_attribute = self
            .document
            .document_element()
            .and_then(|root| root.get_attribute(&self.surface.theme_attribute))
            .is_some_and(|theme| theme == "dark");
        by_attribute || self.document.body().is_some_and(|body| body.class_list().contains(&self.surface.dark_class))
    }

    fn measure(&mut self) -> Result<Viewport, SurfaceError> {
        let backdrop = self.backdrop()?;
        let canvas = self.canvas()?;
        let width = u32::try_from(backdrop.offset_width()).unwrap_or(0);
        let height = u32::try_from(backdrop.offset_height()).unwrap_or(0);
        canvas.set_width(width);
        canvas.set_height(height);
        Ok(Viewport::new(f64::from(width), f64::from(height)))
    }

    fn set_backdrop_visible(&mut self, visible: bool) {
        let backdrop = match self.backdrop() {
            Ok(backdrop) => backdrop,
            Err(err) => {
                log::debug!("starfield: {err}");
                return;
            }
        };
        let display = if visible { "block" } else { "none" };
        if let Err(err) = backdrop.style().set_property("display", display) {
            log::warn!("starfield: cannot set backdrop display: {}", js_message(&err));
        }
    }

    fn request_frame(&mut self) -> Result<FrameHandle, SurfaceError> {
        let callback = self
            .on_frame
            .as_ref()
            .ok_or_else(|| SurfaceError::Schedule("frame callback not installed".to_owned()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|err| SurfaceError::Schedule(js_message(&err)))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("starfield: cannot cancel frame {}: {}", handle.0, js_message(&err));
        }
    }

    fn painter(&mut self) -> Result<Self::Painter, SurfaceError> {
        let canvas = self.canvas()?;
        let id = &self.surface.canvas_id;
        match canvas.get_context("2d") {
            Ok(Some(context)) => context
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| SurfaceError::NoContext(id.clone())),
            Ok(None) => Err(SurfaceError::NoContext(id.clone())),
            Err(err) => Err(SurfaceError::Canvas(js_message(&err))),
        }
    }
}

/// The page's starfield: animator plus its browser callbacks.
pub struct StarrySky {
    window: Window,
    animator: SharedAnimator,
    // Held so the debouncer outlives every pending timeout.
    resize: Rc<RefCell<Debouncer<Timeout>>>,
    on_resize: Closure<dyn FnMut()>,
}

impl StarrySky {
    /// Build the animator and attach the frame and resize callbacks.
    ///
    /// The loop is not started; call [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] when there is no window/document or the
    /// resize listener cannot be attached.
    pub fn mount(config: StarfieldConfig) -> Result<Self, SurfaceError> {
        let host = DomSurface::new(config.surface.clone())?;
        let window = host.window.clone();
        let delay = Duration::from_millis(u64::from(config.resize_debounce_ms));
        let animator = Rc::new(RefCell::new(Animator::new(host, config, js_sys::Math::random().to_bits())));

        let weak = Rc::downgrade(&animator);
        let on_frame = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            if let Some(animator) = weak.upgrade() {
                animator.borrow_mut().on_frame();
            }
        });
        animator.borrow_mut().host_mut().on_frame = Some(on_frame);

        let resize = Rc::new(RefCell::new(Debouncer::new(delay)));
        let on_resize = resize_listener(Rc::downgrade(&animator), Rc::downgrade(&resize));
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|err| SurfaceError::Listener { event: "resize", reason: js_message(&err) })?;

        Ok(Self { window, animator, resize, on_resize })
    }

    /// Start (or keep) the loop if the page is dark; hide the backdrop otherwise.
    pub fn start(&self) {
        self.animator.borrow_mut().start();
    }

    pub fn stop(&self) {
        self.animator.borrow_mut().stop();
    }
}

impl Drop for StarrySky {
    fn drop(&mut self) {
        self.resize.borrow_mut().cancel();
        if let Ok(mut animator) = self.animator.try_borrow_mut() {
            animator.stop();
        }
        let listener = self.on_resize.as_ref().unchecked_ref();
        if let Err(err) = self.window.remove_event_listener_with_callback("resize", listener) {
            log::debug!("starfield: cannot detach resize listener: {}", js_message(&err));
        }
    }
}

/// Window `resize` handler: re-arm the debouncer; the settled timer resizes the field.
fn resize_listener(
    animator: Weak<RefCell<Animator<DomSurface>>>,
    slot: Weak<RefCell<Debouncer<Timeout>>>,
) -> Closure<dyn FnMut()> {
    Closure::<dyn FnMut()>::new(move || {
        let Some(debouncer) = slot.upgrade() else {
            return;
        };
        let animator = animator.clone();
        let settle_slot = slot.clone();
        debouncer.borrow_mut().trigger(move |delay, generation| {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || {
                let settled = settle_slot.upgrade().is_some_and(|slot| slot.borrow_mut().settle(generation));
                if !settled {
                    return;
                }
                if let Some(animator) = animator.upgrade() {
                    animator.borrow_mut().on_resize_settled();
                }
            })
        });
    })
}
