//! Registration page object
//!
//! The example page shipped with the scaffold. Growing the form means
//! adding a line to [`mapping`] and a key to the dataset; the fill logic
//! in [`BasePage`] stays untouched.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::common::{Config, Result};
use crate::data::DataRecord;
use crate::driver::UiDriver;
use crate::report::StepReporter;

use super::base::BasePage;
use super::mapping::{FieldKind, FieldMapping};

/// Locator for the registration form container
const FORM_LOCATOR: &str = "#registration-form";
/// Locator for the submit button
const SUBMIT_LOCATOR: &str = "button[type=\"submit\"]";

/// Field mapping for the registration form, shared by all page instances
static MAPPING: Lazy<Arc<FieldMapping>> = Lazy::new(|| {
    Arc::new(
        FieldMapping::builder()
            .field("first_name", "#firstName", FieldKind::Textbox)
            .field("last_name", "#lastName", FieldKind::Textbox)
            .field("email", "#email", FieldKind::Textbox)
            .field("password", "#password", FieldKind::Textbox)
            .field("confirm_password", "#confirmPassword", FieldKind::Textbox)
            .field("phone", "#phone", FieldKind::Textbox)
            .field("date_of_birth", "#dob", FieldKind::Textbox)
            .field("bio", "#bio", FieldKind::Textarea)
            .field("gender", "input[name=\"gender\"][value=\"{value}\"]", FieldKind::Radio)
            .field("country", "#country", FieldKind::Dropdown)
            .field("terms_conditions", "#terms", FieldKind::Checkbox)
            .field("newsletter", "#newsletter", FieldKind::Checkbox)
            .field("resume", "#resume", FieldKind::File)
            .build()
            .expect("registration field mapping is statically valid"),
    )
});

/// The registration page's field mapping
pub fn mapping() -> Arc<FieldMapping> {
    Arc::clone(&MAPPING)
}

/// Page object for the registration form
pub struct RegistrationPage<D: UiDriver> {
    page: BasePage<D>,
}

impl<D: UiDriver> RegistrationPage<D> {
    pub fn new(driver: D, config: &Config) -> Self {
        Self {
            page: BasePage::new(driver, mapping(), config),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn StepReporter>) -> Self {
        self.page = self.page.with_reporter(reporter);
        self
    }

    /// Navigate to the registration form under the application base URL
    pub async fn open_registration(&mut self, base_url: &str) -> Result<()> {
        let url = format!("{}/register", base_url.trim_end_matches('/'));
        self.page.open(&url).await
    }

    /// Fill the registration form from a resolved dataset
    pub async fn fill_registration_form(&mut self, data: &DataRecord) -> Result<()> {
        self.page.fill_form(data).await
    }

    pub async fn submit(&mut self) -> Result<()> {
        self.page.driver().click(SUBMIT_LOCATOR).await
    }

    pub async fn is_form_displayed(&mut self) -> Result<bool> {
        self.page.driver().is_visible(FORM_LOCATOR).await
    }

    /// The underlying orchestrator, for generic pass-throughs
    pub fn base(&mut self) -> &mut BasePage<D> {
        &mut self.page
    }

    /// Release the driver handle
    pub fn into_driver(self) -> D {
        self.page.into_driver()
    }
}
