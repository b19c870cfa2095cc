//! Checks the browser can make before a form is submitted.
//!
//! Uniqueness of usernames and emails, and whether a login is correct, can
//! only be decided by the server and are not checked here.

use crate::utils::trim;


pub const LIST_NAME_MAX: usize = 64;
pub const USERNAME_MAX: usize = 64;
pub const PASSWORD_MIN: usize = 8;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ListName,
    Username,
    Email,
    Password,
    ConfirmPassword,
}


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a list name.")]
    EmptyListName,

    #[error("List names can be at most 64 characters.")]
    ListNameTooLong,

    #[error("Please enter a username.")]
    EmptyUsername,

    #[error("Usernames can be at most 64 characters.")]
    UsernameTooLong,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a password.")]
    EmptyPassword,

    #[error("Passwords must be at least 8 characters.")]
    PasswordTooShort,

    #[error("Password fields do not match.")]
    PasswordMismatch,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::EmptyListName |
            ValidationError::ListNameTooLong => Field::ListName,

            ValidationError::EmptyUsername |
            ValidationError::UsernameTooLong => Field::Username,

            ValidationError::InvalidEmail => Field::Email,

            ValidationError::EmptyPassword |
            ValidationError::PasswordTooShort => Field::Password,

            ValidationError::PasswordMismatch => Field::ConfirmPassword,
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    pub name: String,
}

impl NewList {
    /// Returns the trimmed list name.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        let name = trim(&self.name).ok_or(ValidationError::EmptyListName)?;

        if name.chars().count() > LIST_NAME_MAX {
            return Err(ValidationError::ListNameTooLong);
        }

        Ok(name)
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let username = trim(&self.username).ok_or(ValidationError::EmptyUsername)?;

        if username.chars().count() > USERNAME_MAX {
            return Err(ValidationError::UsernameTooLong);
        }

        if !is_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }

        let password = check_password(&self.password)?;
        let confirm_password = self.confirm_password.trim();

        if confirm_password.chars().count() < PASSWORD_MIN || confirm_password != password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(())
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub username: String,
    pub password: String,
}

impl Login {
    pub fn validate(&self) -> Result<(), ValidationError> {
        trim(&self.username).ok_or(ValidationError::EmptyUsername)?;

        trim(&self.password).ok_or(ValidationError::EmptyPassword)?;

        Ok(())
    }
}


/// Password fields are stripped before they are checked, the same as on the
/// server. Returns the stripped password.
fn check_password(password: &str) -> Result<&str, ValidationError> {
    let password = trim(password).ok_or(ValidationError::EmptyPassword)?;

    if password.chars().count() < PASSWORD_MIN {
        Err(ValidationError::PasswordTooShort)

    } else {
        Ok(password)
    }
}

fn is_email(input: &str) -> bool {
    let mut parts = input.split('@');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() &&
            !input.contains(char::is_whitespace) &&
            domain.contains('.') &&
            !domain.starts_with('.') &&
            !domain.ends_with('.')
        },
        _ => false,
    }
}
