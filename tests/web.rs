#![cfg(target_arch = "wasm32")]

use discard::Discard;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};

use todo_list_ui::config::ElementIds;
use todo_list_ui::forms;
use todo_list_ui::page::wire_new_list_form;
use todo_list_ui::traits::FormTarget;
use todo_list_ui::{start, ClassForm, Error, FormVisibility, FormVisibilityController, Page, PageConfig};

wasm_bindgen_test_configure!(run_in_browser);


fn create(tag: &str, id: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn create_input(id: &str, value: &str) -> HtmlInputElement {
    let input: HtmlInputElement = create("input", id).dyn_into().unwrap();
    input.set_value(value);
    input
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

fn submit(form: &Element) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);

    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();
    event
}

fn type_into(input: &HtmlInputElement, value: &str) {
    input.set_value(value);
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
}

// Lets spawned futures and queued microtasks run
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });

    JsFuture::from(promise).await.unwrap();
}

fn dashboard_config(prefix: &str) -> PageConfig {
    let mut config = PageConfig::default();
    config.ids.new_list_button = format!("{}-btn", prefix);
    config.ids.new_list_button_main = format!("{}-btn-main", prefix);
    config.ids.new_list_form = format!("{}-form", prefix);
    config.ids.list_name_input = format!("{}-name", prefix);
    config
}

fn aria_expanded(element: &Element) -> Option<String> {
    element.get_attribute("aria-expanded")
}


#[wasm_bindgen_test]
fn class_form_reads_and_flips_the_class() {
    let element = create("form", "class-form");
    element.class_list().add_1("hidden").unwrap();

    let form = ClassForm::new(element.clone(), "hidden");
    assert_eq!(form.visibility(), FormVisibility::Hidden);

    assert_eq!(form.toggle(), FormVisibility::Visible);
    assert!(!element.class_list().contains("hidden"));

    assert_eq!(form.toggle(), FormVisibility::Hidden);
    assert!(element.class_list().contains("hidden"));
}

#[wasm_bindgen_test]
fn buttons_toggle_the_shared_form() {
    let element = create("form", "shared-form");
    element.class_list().add_1("hidden").unwrap();

    let primary = create("button", "shared-primary");
    let secondary = create("button", "shared-secondary");

    let controller = FormVisibilityController::new(ClassForm::new(element.clone(), "hidden"));
    assert!(controller.attach(Some(&primary)).is_some());
    assert!(controller.attach_with_scroll(Some(&secondary)).is_some());

    click(&primary);
    assert_eq!(controller.visibility(), FormVisibility::Visible);

    click(&secondary);
    assert_eq!(controller.visibility(), FormVisibility::Hidden);
    assert!(element.class_list().contains("hidden"));

    click(&primary);
    assert_eq!(controller.visibility(), FormVisibility::Visible);
    assert!(!element.class_list().contains("hidden"));
}

#[wasm_bindgen_test]
fn dropped_listener_stays_attached() {
    let element = create("form", "dropped-form");
    let button = create("button", "dropped-button");

    let controller = FormVisibilityController::new(ClassForm::new(element, "hidden"));
    drop(controller.attach(Some(&button)));

    click(&button);
    assert_eq!(controller.visibility(), FormVisibility::Hidden);
}

#[wasm_bindgen_test]
fn discarded_listener_is_removed() {
    let element = create("form", "discarded-form");
    let button = create("button", "discarded-button");

    let controller = FormVisibilityController::new(ClassForm::new(element, "hidden"));
    let listener = controller.attach(Some(&button)).unwrap();

    click(&button);
    assert_eq!(controller.visibility(), FormVisibility::Hidden);

    listener.discard();

    click(&button);
    assert_eq!(controller.visibility(), FormVisibility::Hidden);
}


#[wasm_bindgen_test]
fn button_without_form_fails() {
    let config = dashboard_config("orphan");
    create("button", "orphan-btn");

    match wire_new_list_form(&config) {
        Err(Error::MissingElement { id }) => assert_eq!(id, "orphan-form"),
        other => panic!("expected a missing form, got {:?}", other),
    }
}

#[wasm_bindgen_test]
fn nothing_to_wire_is_ok() {
    assert!(wire_new_list_form(&dashboard_config("absent")).is_ok());
}

#[wasm_bindgen_test]
async fn buttons_mirror_aria_expanded() {
    let config = dashboard_config("aria");
    let form = create("form", "aria-form");
    form.class_list().add_1("hidden").unwrap();
    let primary = create("button", "aria-btn");
    let secondary = create("button", "aria-btn-main");

    wire_new_list_form(&config).unwrap();

    next_tick().await;
    assert_eq!(aria_expanded(&primary).as_deref(), Some("false"));
    assert_eq!(aria_expanded(&secondary).as_deref(), Some("false"));

    click(&primary);
    next_tick().await;
    assert_eq!(aria_expanded(&primary).as_deref(), Some("true"));
    assert_eq!(aria_expanded(&secondary).as_deref(), Some("true"));

    click(&secondary);
    next_tick().await;
    assert!(form.class_list().contains("hidden"));
    assert_eq!(aria_expanded(&primary).as_deref(), Some("false"));
    assert_eq!(aria_expanded(&secondary).as_deref(), Some("false"));
}

// The only test that calls `start`, since a page starts once
#[wasm_bindgen_test]
fn start_can_be_retried_and_runs_once() {
    let config = dashboard_config("start");
    let button = create("button", "start-btn");

    assert!(matches!(start(Page::Dashboard, &config), Err(Error::MissingElement { .. })));

    let form = create("form", "start-form");
    form.class_list().add_1("hidden").unwrap();

    assert!(start(Page::Dashboard, &config).is_ok());

    click(&button);
    assert!(!form.class_list().contains("hidden"));

    assert!(start(Page::Dashboard, &config).is_ok());

    // Wiring twice would make each click toggle twice
    click(&button);
    assert!(form.class_list().contains("hidden"));
}


fn new_list_ids(prefix: &str) -> ElementIds {
    ElementIds {
        new_list_form: format!("{}-form", prefix),
        list_name_input: format!("{}-name", prefix),
        ..ElementIds::default()
    }
}

#[wasm_bindgen_test]
fn blank_list_name_blocks_submit() {
    let ids = new_list_ids("blank");
    let form = create("form", "blank-form");
    let input = create_input("blank-name", "   ");

    assert!(forms::validate_new_list(&ids).is_some());

    let event = submit(&form);
    assert!(event.default_prevented());
    assert_eq!(input.validation_message().unwrap(), "Please enter a list name.");

    type_into(&input, "Groceries");
    assert_eq!(input.validation_message().unwrap(), "");

    assert!(!submit(&form).default_prevented());
}

#[wasm_bindgen_test]
fn valid_list_name_submits() {
    let ids = new_list_ids("valid");
    let form = create("form", "valid-form");
    let input = create_input("valid-name", "Groceries");

    assert!(forms::validate_new_list(&ids).is_some());

    assert!(!submit(&form).default_prevented());
    assert_eq!(input.validation_message().unwrap(), "");
}

#[wasm_bindgen_test]
fn missing_form_or_input_is_skipped() {
    assert!(forms::validate_new_list(&new_list_ids("nowhere")).is_none());

    create("form", "inputless-form");
    assert!(forms::validate_new_list(&new_list_ids("inputless")).is_none());
}

#[wasm_bindgen_test]
fn password_mismatch_is_reported_on_confirmation() {
    let ids = ElementIds {
        register_form: "signup-form".to_owned(),
        username_input: "signup-username".to_owned(),
        email_input: "signup-email".to_owned(),
        password_input: "signup-password".to_owned(),
        confirm_password_input: "signup-confirm".to_owned(),
        ..ElementIds::default()
    };

    let form = create("form", "signup-form");
    create_input("signup-username", "test_username");
    create_input("signup-email", "test_email@gmail.com");
    let password = create_input("signup-password", "123456789");
    let confirm = create_input("signup-confirm", "987654321");

    assert!(forms::validate_registration(&ids).is_some());

    assert!(submit(&form).default_prevented());
    assert_eq!(confirm.validation_message().unwrap(), "Password fields do not match.");
    assert_eq!(password.validation_message().unwrap(), "");

    type_into(&confirm, "123456789");
    assert!(!submit(&form).default_prevented());
}

#[wasm_bindgen_test]
fn error_converts_to_js_error() {
    let value: JsValue = Error::MissingElement { id: "new-list-form".to_owned() }.into();
    let error: js_sys::Error = value.dyn_into().unwrap();
    assert_eq!(String::from(error.message()), "element #new-list-form is missing from the page");
}
