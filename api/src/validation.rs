//! Synchronous form validation.
//!
//! Validators take the raw form values and either build the request body or
//! return every field error at once, keyed by field name, so the form can
//! mark all offending inputs in one pass.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::dto::{CollectionInput, DataSourceInput};
use crate::model::DataSourceType;

pub const COLLECTION_NAME_REQUIRED: &str = "Collection name is required.";
pub const NAME_REQUIRED: &str = "Name is required.";
pub const TYPE_REQUIRED: &str = "Type is required.";
pub const URI_REQUIRED: &str = "Connection URI is required.";
pub const URI_INVALID: &str = "Invalid URI format.";
pub const LOGIN_ID_REQUIRED: &str = "Username or email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Field name → message for every failing field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    /// Drop the error for one field, e.g. once the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// `true` when `uri` parses as an absolute URI.
#[must_use]
pub fn is_valid_uri(uri: &str) -> bool {
    url::Url::parse(uri.trim()).is_ok()
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref().is_some_and(|re| re.is_match(value))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionForm {
    pub name: String,
    pub description: String,
}

impl CollectionForm {
    /// # Errors
    ///
    /// `name` when the trimmed name is empty.
    pub fn validate(&self) -> Result<CollectionInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", COLLECTION_NAME_REQUIRED);
        }
        let description = Some(self.description.trim()).filter(|d| !d.is_empty()).map(str::to_owned);
        errors.into_result(CollectionInput { name: name.to_owned(), description })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSourceForm {
    pub name: String,
    /// Raw select value; blank until the user picks a type.
    pub kind: String,
    pub collection_id: Option<String>,
    pub connection_uri: String,
    pub credentials: String,
}

impl DataSourceForm {
    /// # Errors
    ///
    /// Any of `name`, `type`, `connectionUri`.
    pub fn validate(&self) -> Result<DataSourceInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", NAME_REQUIRED);
        }
        let kind = DataSourceType::parse(&self.kind);
        if kind.is_none() {
            errors.insert("type", TYPE_REQUIRED);
        }
        let uri = self.connection_uri.trim();
        if uri.is_empty() {
            errors.insert("connectionUri", URI_REQUIRED);
        } else if !is_valid_uri(uri) {
            errors.insert("connectionUri", URI_INVALID);
        }
        let Some(kind) = kind else {
            return Err(errors);
        };
        let credentials = Some(self.credentials.trim()).filter(|c| !c.is_empty()).map(str::to_owned);
        errors.into_result(DataSourceInput {
            name: name.to_owned(),
            kind,
            collection_id: self.collection_id.clone().filter(|c| !c.is_empty()),
            connection_uri: Some(uri.to_owned()),
            credentials,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username_or_email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// `usernameOrEmail` when blank or a malformed email, `password` when
    /// blank.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let id = self.username_or_email.trim();
        if id.is_empty() {
            errors.insert("usernameOrEmail", LOGIN_ID_REQUIRED);
        } else if id.contains('@') && !is_valid_email(id) {
            errors.insert("usernameOrEmail", EMAIL_INVALID);
        }
        if self.password.is_empty() {
            errors.insert("password", PASSWORD_REQUIRED);
        }
        errors.into_result(())
    }
}
