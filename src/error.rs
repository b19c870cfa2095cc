use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("element #{id} is missing from the page")]
    MissingElement { id: String },

    #[error("invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid page configuration: {name} {reason}")]
    Setting { name: &'static str, reason: &'static str },

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl Error {
    pub(crate) fn missing(id: &str) -> Self {
        Error::MissingElement { id: id.to_owned() }
    }

    pub(crate) fn from_js(value: JsValue) -> Self {
        use wasm_bindgen::JsCast;

        match value.dyn_ref::<js_sys::Error>() {
            Some(e) => Error::Js(String::from(e.message())),
            None => Error::Js(format!("{:?}", value)),
        }
    }
}

impl From<Error> for JsValue {
    fn from(error: Error) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
