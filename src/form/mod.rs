//! Form module - the personal details record and its collection state.
//!
//! - `validation` - field rules producing an [`ErrorMap`]
//! - `session` - the mutable form context owned by the collection surface

pub mod session;
pub mod validation;

pub use session::{FormSession, SubmitError};
pub use validation::{validate, ErrorMap};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::generators::Validator;

/// Keys of the five form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Position,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Position,
        FormField::Description,
    ];

    /// Wire name used in serialized records and error maps.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Position => "position",
            Self::Description => "description",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Position => "Position",
            Self::Description => "Description",
        }
    }

    /// Label followed by a colon, as printed in the document and preview.
    pub fn caption(&self) -> String {
        format!("{}:", self.label())
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "e.g. John Doe",
            Self::Email => "e.g. Johndoe@gmail.com",
            Self::Phone => "e.g. (220) 222 -20002",
            Self::Position => "e.g. Junior Front end Developer",
            Self::Description => "e.g. Work experiences",
        }
    }

    /// Whether the validator has rules for this field.
    pub fn is_validated(&self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Phone)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The personal details entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub description: String,
}

impl FieldRecord {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Position => &self.position,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Position => &mut self.position,
            FormField::Description => &mut self.description,
        };
        *slot = value.into();
    }

    /// Consume the record, returning it sealed if it has no validation errors.
    pub fn into_validated(self) -> Result<ValidatedRecord, ErrorMap> {
        Validator::validate(&self)?;
        Ok(ValidatedRecord(self))
    }
}

/// A record that passed validation. Read-only from here on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord(FieldRecord);

impl ValidatedRecord {
    pub fn record(&self) -> &FieldRecord {
        &self.0
    }

    pub fn into_inner(self) -> FieldRecord {
        self.0
    }
}

impl Deref for ValidatedRecord {
    type Target = FieldRecord;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
