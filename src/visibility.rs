//! Shown/hidden state of the "new list" form.
//!
//! The DOM is the source of truth: the form is hidden exactly when it carries
//! the hidden class. [`FormVisibilityController`] flips that class in response
//! to clicks and mirrors the result into a [`Mutable`] so other parts of the
//! page can follow it as a signal.

use std::rc::Rc;

use futures_signals::signal::{Mutable, Signal};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::bindings;
use crate::events;
use crate::traits::{FormTarget, Trigger};
use crate::utils::{on, EventListener};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVisibility {
    Hidden,
    Visible,
}

impl FormVisibility {
    #[inline]
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden { FormVisibility::Hidden } else { FormVisibility::Visible }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self == FormVisibility::Visible
    }

    /// Value for the `aria-expanded` attribute of a trigger.
    #[inline]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_visible() { "true" } else { "false" }
    }
}


/// A form element hidden by a CSS class.
#[derive(Debug, Clone)]
pub struct ClassForm {
    element: Element,
    hidden_class: String,
}

impl ClassForm {
    pub fn new(element: Element, hidden_class: &str) -> Self {
        Self {
            element,
            hidden_class: hidden_class.to_owned(),
        }
    }
}

impl FormTarget for ClassForm {
    #[inline]
    fn visibility(&self) -> FormVisibility {
        FormVisibility::from_hidden(bindings::has_class(&self.element, &self.hidden_class))
    }

    #[inline]
    fn toggle(&self) -> FormVisibility {
        FormVisibility::from_hidden(bindings::toggle_class(&self.element, &self.hidden_class))
    }

    #[inline]
    fn scroll_into_view(&self) {
        bindings::scroll_into_view_smooth(&self.element);
    }
}

impl Trigger for Element {
    type Listener = EventListener;

    #[inline]
    fn on_click<F>(&self, mut callback: F) -> Self::Listener where F: FnMut() + 'static {
        on(self.unchecked_ref(), move |_: events::Click| callback())
    }
}


struct Shared<F> {
    form: F,
    state: Mutable<FormVisibility>,
}

impl<F> Shared<F> where F: FormTarget {
    fn toggle(&self) -> FormVisibility {
        let visibility = self.form.toggle();
        self.state.set_neq(visibility);
        visibility
    }

    fn toggle_and_reveal(&self) -> FormVisibility {
        let visibility = self.toggle();

        if visibility.is_visible() {
            self.form.scroll_into_view();
        }

        visibility
    }
}


/// Wires trigger clicks to the visibility of a single form.
///
/// Every trigger attached to the same controller flips the same state.
pub struct FormVisibilityController<F> {
    shared: Rc<Shared<F>>,
}

impl<F> Clone for FormVisibilityController<F> {
    #[inline]
    fn clone(&self) -> Self {
        Self { shared: self.shared.clone() }
    }
}

impl<F> FormVisibilityController<F> where F: FormTarget + 'static {
    pub fn new(form: F) -> Self {
        let state = Mutable::new(form.visibility());

        Self {
            shared: Rc::new(Shared { form, state }),
        }
    }

    #[inline]
    pub fn form(&self) -> &F {
        &self.shared.form
    }

    #[inline]
    pub fn visibility(&self) -> FormVisibility {
        self.shared.state.get()
    }

    /// The current state followed by every change.
    #[inline]
    pub fn signal(&self) -> impl Signal<Item = FormVisibility> {
        self.shared.state.signal()
    }

    #[inline]
    pub fn toggle(&self) -> FormVisibility {
        self.shared.toggle()
    }

    /// Toggles, then scrolls the form into view if it is now visible.
    #[inline]
    pub fn toggle_and_reveal(&self) -> FormVisibility {
        self.shared.toggle_and_reveal()
    }

    /// Makes every click on `trigger` toggle the form.
    ///
    /// Does nothing if the trigger is absent.
    pub fn attach<T>(&self, trigger: Option<&T>) -> Option<T::Listener> where T: Trigger {
        let trigger = trigger?;
        let shared = self.shared.clone();

        Some(trigger.on_click(move || {
            let visibility = shared.toggle();
            tracing::debug!(?visibility, "new list form toggled");
        }))
    }

    /// Like [`attach`](Self::attach), but also scrolls the form into view
    /// whenever a click reveals it.
    pub fn attach_with_scroll<T>(&self, trigger: Option<&T>) -> Option<T::Listener> where T: Trigger {
        let trigger = trigger?;
        let shared = self.shared.clone();

        Some(trigger.on_click(move || {
            let visibility = shared.toggle_and_reveal();
            tracing::debug!(?visibility, "new list form toggled and revealed");
        }))
    }
}
