use serde::Deserialize;

use crate::effects::{GlobeConfig, RevealConfig};
use crate::error::Error;


/// Ids of the elements the pages are wired to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub new_list_button: String,
    /// Only rendered when no list is selected.
    pub new_list_button_main: String,
    pub new_list_form: String,
    pub list_name_input: String,

    pub register_form: String,
    pub login_form: String,
    pub username_input: String,
    pub email_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            new_list_button: "new-list-btn".to_owned(),
            new_list_button_main: "new-list-btn-main".to_owned(),
            new_list_form: "new-list-form".to_owned(),
            list_name_input: "id_list_name".to_owned(),

            register_form: "register-form".to_owned(),
            login_form: "login-form".to_owned(),
            username_input: "id_username".to_owned(),
            email_input: "id_email".to_owned(),
            password_input: "id_password".to_owned(),
            confirm_password_input: "id_confirm_password".to_owned(),
        }
    }
}


#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub ids: ElementIds,
    /// Class whose presence hides an element.
    pub hidden_class: String,
    pub globe: GlobeConfig,
    pub reveal: RevealConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            hidden_class: "hidden".to_owned(),
            globe: GlobeConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parses a JSON override, falling back to the defaults for anything it
    /// leaves out.
    pub fn from_json(json: Option<&str>) -> Result<Self, Error> {
        let config: Self = match json {
            Some(json) if !json.trim().is_empty() => serde_json::from_str(json)?,
            _ => Self::default(),
        };

        config.check()?;
        Ok(config)
    }

    /// `classList` throws for class names that are empty or contain
    /// whitespace, which would break every toggle.
    fn check(&self) -> Result<(), Error> {
        if self.hidden_class.is_empty() {
            return Err(Error::Setting { name: "hiddenClass", reason: "must not be empty" });
        }

        if self.hidden_class.contains(char::is_whitespace) {
            return Err(Error::Setting { name: "hiddenClass", reason: "must be a single class name" });
        }

        Ok(())
    }
}
