//! Declarative per-page field mappings
//!
//! A field mapping links each logical field name on a page to a UI
//! locator and an interaction kind. Mappings are declared once per page
//! type, validated at construction, and never mutated afterward.

use std::collections::HashMap;

use serde::Deserialize;

use crate::common::{Error, Result};

/// Interaction kind of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text input: cleared, then filled
    Textbox,
    /// Multi-line text input: cleared, then filled
    Textarea,
    /// Radio group: the option whose value matches is checked
    Radio,
    /// Checkbox: checked state follows the value's truthiness
    Checkbox,
    /// Select element: option chosen by visible label or underlying value
    Dropdown,
    /// File input: one or more paths attached
    File,
    /// Free-form element, clicked when the value is truthy
    Custom,
}

impl FieldKind {
    /// Parse a declarative kind name, rejecting typos at construction time
    ///
    /// `key` names the offending field in the error.
    pub fn parse(key: &str, raw: &str) -> Result<Self> {
        match raw {
            "textbox" => Ok(Self::Textbox),
            "textarea" => Ok(Self::Textarea),
            "radio" => Ok(Self::Radio),
            "checkbox" => Ok(Self::Checkbox),
            "dropdown" => Ok(Self::Dropdown),
            "file" => Ok(Self::File),
            "custom" => Ok(Self::Custom),
            other => Err(Error::UnsupportedFieldKind {
                key: key.to_string(),
                kind: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Textbox => "textbox",
            Self::Textarea => "textarea",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Dropdown => "dropdown",
            Self::File => "file",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration of one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Logical field name, unique within the page's mapping
    pub key: String,
    /// UI locator; radio locators may carry a `{value}` placeholder that
    /// is substituted with the dataset value at dispatch time
    pub locator: String,
    /// Interaction kind
    pub kind: FieldKind,
}

/// Ordered, immutable field mapping for one page type
///
/// Declaration order is preserved for dispatch; a key index backs the
/// by-name lookups.
#[derive(Debug, Clone, Default)]
pub struct FieldMapping {
    fields: Vec<FieldSpec>,
    index: HashMap<String, usize>,
}

impl FieldMapping {
    pub fn builder() -> FieldMappingBuilder {
        FieldMappingBuilder::default()
    }

    /// Fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Look up a field by its logical key
    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.index.get(key).map(|&i| &self.fields[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder validating key uniqueness and kind membership
#[derive(Debug, Default)]
pub struct FieldMappingBuilder {
    fields: Vec<FieldSpec>,
    error: Option<Error>,
}

impl FieldMappingBuilder {
    /// Declare a field with a statically known kind
    pub fn field(mut self, key: &str, locator: &str, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec {
            key: key.to_string(),
            locator: locator.to_string(),
            kind,
        });
        self
    }

    /// Declare a field with a kind given as a string, as declarative
    /// tables written by hand do; an unrecognized kind fails `build`
    pub fn field_raw(mut self, key: &str, locator: &str, kind: &str) -> Self {
        match FieldKind::parse(key, kind) {
            Ok(kind) => self.fields.push(FieldSpec {
                key: key.to_string(),
                locator: locator.to_string(),
                kind,
            }),
            Err(e) => self.error = self.error.or(Some(e)),
        }
        self
    }

    /// Finish the mapping, rejecting duplicate keys
    pub fn build(self) -> Result<FieldMapping> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let mut index = HashMap::with_capacity(self.fields.len());
        for (i, field) in self.fields.iter().enumerate() {
            if index.insert(field.key.clone(), i).is_some() {
                return Err(Error::DuplicateFieldKey(field.key.clone()));
            }
        }
        Ok(FieldMapping { fields: self.fields, index })
    }
}
