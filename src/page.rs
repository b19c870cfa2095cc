use std::cell::Cell;

use web_sys::Element;

use crate::bindings;
use crate::config::PageConfig;
use crate::effects;
use crate::error::Error;
use crate::forms;
use crate::operations;
use crate::traits::FormTarget;
use crate::visibility::{ClassForm, FormVisibilityController};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Dashboard,
}


thread_local! {
    static STARTED: Cell<bool> = Cell::new(false);
}


/// Startup phase of a page.
///
/// Only the first successful call per page load does anything. A call that
/// fails leaves the page unstarted so it can be retried.
pub fn start(page: Page, config: &PageConfig) -> Result<(), Error> {
    if STARTED.with(|started| started.get()) {
        tracing::warn!(?page, "page already started, ignoring");
        return Ok(());
    }

    let _span = tracing::info_span!("start", ?page).entered();

    effects::init_globe(&config.globe);
    effects::init_reveal(&config.reveal);
    effects::replace_icons();

    match page {
        Page::Home => {},
        Page::Login => {
            forms::validate_login(&config.ids);
        },
        Page::Register => {
            forms::validate_registration(&config.ids);
        },
        Page::Dashboard => {
            wire_new_list_form(config)?;
            forms::validate_new_list(&config.ids);
        },
    }

    STARTED.with(|started| started.set(true));

    tracing::info!("page started");
    Ok(())
}


/// Wires the new list buttons to the new list form.
///
/// Missing buttons are skipped. Buttons without the form they toggle are an
/// error, and nothing is wired.
pub fn wire_new_list_form(config: &PageConfig) -> Result<(), Error> {
    let ids = &config.ids;

    let primary = bindings::get_element_by_id(&ids.new_list_button);
    let secondary = bindings::get_element_by_id(&ids.new_list_button_main);

    if primary.is_none() {
        tracing::debug!(id = %ids.new_list_button, "no new list button on this page");
    }

    if secondary.is_none() {
        tracing::debug!(id = %ids.new_list_button_main, "no main new list button on this page");
    }

    let form = match bindings::get_element_by_id(&ids.new_list_form) {
        Some(form) => form,
        None if primary.is_none() && secondary.is_none() => return Ok(()),
        None => {
            tracing::error!(id = %ids.new_list_form, "new list buttons are present but the form is not");
            return Err(Error::missing(&ids.new_list_form));
        },
    };

    let controller = FormVisibilityController::new(ClassForm::new(form, &config.hidden_class));

    controller.attach(primary.as_ref());
    controller.attach_with_scroll(secondary.as_ref());

    for trigger in primary.iter().chain(secondary.iter()) {
        mirror_expanded(&controller, trigger);
    }

    tracing::debug!(visibility = ?controller.visibility(), "new list form wired");
    Ok(())
}

fn mirror_expanded<F>(controller: &FormVisibilityController<F>, trigger: &Element) where F: FormTarget + 'static {
    let trigger = trigger.clone();

    operations::for_each(controller.signal(), move |visibility| {
        bindings::set_attribute(&trigger, "aria-expanded", visibility.aria_expanded());
    });
}
