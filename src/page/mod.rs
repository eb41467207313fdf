//! Page objects and the action dispatcher
//!
//! A page type declares a [`FieldMapping`] once; [`BasePage`] joins that
//! mapping with a resolved [`crate::data::DataRecord`] and dispatches
//! each field to the driver action its kind calls for.

mod base;
mod fill;
mod mapping;
pub mod registration;

pub use base::BasePage;
pub use fill::fill_form_data;
pub use mapping::{FieldKind, FieldMapping, FieldMappingBuilder, FieldSpec};
pub use registration::RegistrationPage;
