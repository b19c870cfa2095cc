use std::borrow::Cow;

use discard::Discard;
use gloo_events::EventListenerOptions;
use wasm_bindgen::{UnwrapThrowExt, intern};
use web_sys::{EventTarget, Event};

use crate::traits::StaticEvent;


pub struct EventListener(Option<gloo_events::EventListener>);

impl EventListener {
    #[inline]
    pub(crate) fn new<N, F>(elem: &EventTarget, name: N, preventable: bool, callback: F) -> Self
        where N: Into<Cow<'static, str>>,
              F: FnMut(&Event) + 'static {

        let name = name.into();
        intern(&name);

        let options = if preventable {
            EventListenerOptions::enable_prevent_default()

        } else {
            EventListenerOptions::default()
        };

        Self(Some(gloo_events::EventListener::new_with_options(
            elem,
            name,
            options,
            callback,
        )))
    }
}

impl Drop for EventListener {
    #[inline]
    fn drop(&mut self) {
        // Listeners live as long as the page unless they are discarded
        if let Some(listener) = self.0.take() {
            listener.forget();
        }
    }
}

impl Discard for EventListener {
    #[inline]
    fn discard(mut self) {
        // Drops the listener which cleans it up
        let _ = self.0.take().unwrap_throw();
    }
}


#[inline]
pub(crate) fn on<E, F>(element: &EventTarget, mut callback: F) -> EventListener
    where E: StaticEvent,
          F: FnMut(E) + 'static {
    EventListener::new(element, E::EVENT_TYPE, false, move |e| {
        callback(E::unchecked_from_event(e.clone()));
    })
}

#[inline]
pub(crate) fn on_preventable<E, F>(element: &EventTarget, mut callback: F) -> EventListener
    where E: StaticEvent,
          F: FnMut(E) + 'static {
    EventListener::new(element, E::EVENT_TYPE, true, move |e| {
        callback(E::unchecked_from_event(e.clone()));
    })
}


#[inline]
pub(crate) fn trim(input: &str) -> Option<&str> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        None

    } else {
        Some(trimmed)
    }
}
