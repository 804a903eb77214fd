//! Contact records
//!
//! A contact is the unit of persistence: `{id, name, number}`. The number is
//! kept exactly as the user typed it (after trimming surrounding whitespace);
//! normalization happens only at comparison and display time.
//!
//! ## Validation
//!
//! Both `name` and `number` must be non-empty after `trim()`. Construction
//! and patching go through the same check, so a record that reaches storage
//! always satisfies it.

use crate::error::{Error, Result};
use crate::types::ContactId;
use serde::{Deserialize, Serialize};

/// A persisted contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Immutable identifier assigned at creation
    pub id: ContactId,
    /// Display name, not required to be unique
    pub name: String,
    /// Phone number in local or `+`-prefixed international form
    pub number: String,
}

impl Contact {
    /// Create a new contact with a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if either field is empty after trimming.
    pub fn new(name: &str, number: &str) -> Result<Self> {
        let name = required("name", name)?;
        let number = required("number", number)?;
        Ok(Self {
            id: ContactId::new(),
            name,
            number,
        })
    }

    /// Check the persisted-record invariant
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.number.trim().is_empty()
    }
}

/// Partial update for a contact
///
/// Fields left as `None` keep their current value. The identifier can never
/// be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPatch {
    /// Replacement name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

impl ContactPatch {
    /// Patch that replaces only the name
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: None,
        }
    }

    /// Patch that replaces only the number
    pub fn number(number: impl Into<String>) -> Self {
        Self {
            name: None,
            number: Some(number.into()),
        }
    }

    /// Also replace the number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.number.is_none()
    }

    /// Merge this patch into `contact`
    ///
    /// All provided fields are validated before any of them is written, so a
    /// failed patch leaves the contact untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if a provided field is empty after trimming.
    pub fn apply(&self, contact: &mut Contact) -> Result<()> {
        let name = self.name.as_deref().map(|n| required("name", n)).transpose()?;
        let number = self
            .number
            .as_deref()
            .map(|n| required("number", n))
            .transpose()?;

        if let Some(name) = name {
            contact.name = name;
        }
        if let Some(number) = number {
            contact.number = number;
        }
        Ok(())
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::empty_field(field));
    }
    Ok(trimmed.to_string())
}
