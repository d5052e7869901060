use std::sync::atomic::{AtomicUsize, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

static LIVE_LISTENERS: AtomicUsize = AtomicUsize::new(0);

/// Number of listeners registered through [`Listener`] and not yet removed.
pub fn live_listener_count() -> usize {
    LIVE_LISTENERS.load(Ordering::SeqCst)
}

/// An event listener that stays registered for as long as this value lives.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        LIVE_LISTENERS.fetch_add(1, Ordering::SeqCst);
        Some(Self {
            target,
            event,
            closure,
        })
    }

    pub fn on_window(event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<Self> {
        let window = web::window()?;
        Self::new(window.into(), event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        LIVE_LISTENERS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Window `resize`.
pub fn on_resize(mut handler: impl FnMut() + 'static) -> Option<Listener> {
    Listener::on_window("resize", move |_ev| handler())
}

/// Window `pointermove`, with the event's client position.
pub fn on_pointer_move(mut handler: impl FnMut(&web::PointerEvent) + 'static) -> Option<Listener> {
    Listener::on_window("pointermove", move |ev| {
        if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
            handler(pe);
        }
    })
}

/// Window `scroll`.
pub fn on_scroll(mut handler: impl FnMut() + 'static) -> Option<Listener> {
    Listener::on_window("scroll", move |_ev| handler())
}
