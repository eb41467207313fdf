//! Data-driven UI test-automation scaffold
//!
//! The suite grows by editing declarative data: per-page field mappings
//! dispatch form interactions by field kind, the test data resolver maps
//! test ids to datasets, and environment overlays merge into one typed
//! configuration per session.

pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
pub mod data;
pub mod driver;
pub mod page;
pub mod report;

// Re-export commonly used types for tests
pub use common::{Config, Error, Result};
pub use data::{DataCache, DataRecord, FieldValue, TestDataResolver};
pub use driver::{MockDriver, UiDriver};
pub use page::{BasePage, FieldKind, FieldMapping, FieldSpec, RegistrationPage};
