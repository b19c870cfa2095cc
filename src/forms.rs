//! Client-side validation of the page's forms.
//!
//! A failing check cancels the submission and reports the message on the
//! offending input through the browser's own validity UI.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::bindings;
use crate::config::ElementIds;
use crate::events;
use crate::utils::{on, on_preventable, EventListener};
use crate::validation::{Field, Login, NewList, Registration, ValidationError};


struct Fields(Vec<(Field, HtmlInputElement)>);

impl Fields {
    fn lookup(ids: &[(Field, &str)]) -> Option<Self> {
        ids.iter()
            .map(|&(field, id)| {
                let input = bindings::get_input_by_id(id);

                if input.is_none() {
                    tracing::warn!(id, "form input is missing, validation disabled");
                }

                Some((field, input?))
            })
            .collect::<Option<Vec<_>>>()
            .map(Fields)
    }

    fn get(&self, field: Field) -> Option<&HtmlInputElement> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, input)| input)
    }

    fn value(&self, field: Field) -> String {
        self.get(field).map(bindings::input_value).unwrap_or_default()
    }
}


fn validate_on_submit<V>(form: &Element, fields: Fields, validate: V) -> Vec<EventListener>
    where V: Fn(&Fields) -> Result<(), ValidationError> + 'static {

    let mut listeners: Vec<EventListener> = fields.0.iter()
        .map(|(_, input)| {
            let input_ = input.clone();

            on(input.unchecked_ref(), move |_: events::Input| {
                bindings::clear_invalid(&input_);
            })
        })
        .collect();

    let fields = Rc::new(fields);

    listeners.push(on_preventable(form.unchecked_ref(), move |e: events::Submit| {
        if let Err(error) = validate(&fields) {
            e.prevent_default();

            tracing::debug!(field = ?error.field(), %error, "form submission blocked");

            if let Some(input) = fields.get(error.field()) {
                bindings::report_invalid(input, &error.to_string());
            }
        }
    }));

    listeners
}

fn wire<V>(form_id: &str, ids: &[(Field, &str)], validate: V) -> Option<Vec<EventListener>>
    where V: Fn(&Fields) -> Result<(), ValidationError> + 'static {

    let form = bindings::get_element_by_id(form_id)?;
    let fields = Fields::lookup(ids)?;

    Some(validate_on_submit(&form, fields, validate))
}


/// Does nothing if the form is not on the page.
pub fn validate_new_list(ids: &ElementIds) -> Option<Vec<EventListener>> {
    wire(&ids.new_list_form, &[(Field::ListName, ids.list_name_input.as_str())], |fields| {
        NewList { name: fields.value(Field::ListName) }.validate().map(|_| ())
    })
}

pub fn validate_registration(ids: &ElementIds) -> Option<Vec<EventListener>> {
    wire(&ids.register_form, &[
        (Field::Username, ids.username_input.as_str()),
        (Field::Email, ids.email_input.as_str()),
        (Field::Password, ids.password_input.as_str()),
        (Field::ConfirmPassword, ids.confirm_password_input.as_str()),
    ], |fields| {
        Registration {
            username: fields.value(Field::Username),
            email: fields.value(Field::Email),
            password: fields.value(Field::Password),
            confirm_password: fields.value(Field::ConfirmPassword),
        }.validate()
    })
}

pub fn validate_login(ids: &ElementIds) -> Option<Vec<EventListener>> {
    wire(&ids.login_form, &[
        (Field::Username, ids.username_input.as_str()),
        (Field::Password, ids.password_input.as_str()),
    ], |fields| {
        Login {
            username: fields.value(Field::Username),
            password: fields.value(Field::Password),
        }.validate()
    })
}
