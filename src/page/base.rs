//! Base page orchestrator
//!
//! Ties a page type's static field mapping, a resolved data record, and
//! the active driver handle together. This is the only place the mapping
//! and the dispatcher are joined, which is what lets every page type
//! reuse the same generic fill logic without overriding it.

use std::sync::Arc;
use std::time::Duration;

use crate::common::{Config, Error, Result};
use crate::data::DataRecord;
use crate::driver::UiDriver;
use crate::report::{NoopReporter, StepReporter};

use super::fill::fill_form_data;
use super::mapping::FieldMapping;

/// Generic page orchestrator every page type builds on
pub struct BasePage<D: UiDriver> {
    driver: D,
    mapping: Arc<FieldMapping>,
    timeout: Duration,
    reporter: Arc<dyn StepReporter>,
}

impl<D: UiDriver> BasePage<D> {
    /// Bind a driver to a page type's shared field mapping
    ///
    /// The interaction timeout comes from the session [`Config`].
    pub fn new(driver: D, mapping: Arc<FieldMapping>, config: &Config) -> Self {
        Self {
            driver,
            mapping,
            timeout: Duration::from_millis(config.browser.timeout_ms),
            reporter: Arc::new(NoopReporter),
        }
    }

    /// Replace the injected step reporter
    pub fn with_reporter(mut self, reporter: Arc<dyn StepReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Navigate to a URL
    pub async fn open(&mut self, url: &str) -> Result<()> {
        self.reporter.step(&format!("Open {url}"));
        self.driver.open(url).await
    }

    /// Fill the page's form from a data record
    ///
    /// Binds the page's static mapping to the generic dispatcher.
    pub async fn fill_form(&mut self, data: &DataRecord) -> Result<()> {
        fill_form_data(&mut self.driver, &self.mapping, data, self.reporter.as_ref()).await
    }

    /// Whether the element behind a mapped field is visible
    pub async fn is_visible(&mut self, key: &str) -> Result<bool> {
        let locator = self.locator_for(key)?;
        self.driver.is_visible(&locator).await
    }

    /// Wait for a mapped field's element, defaulting to the configured timeout
    pub async fn wait_for(&mut self, key: &str, timeout: Option<Duration>) -> Result<()> {
        let locator = self.locator_for(key)?;
        self.driver
            .wait_for(&locator, timeout.unwrap_or(self.timeout))
            .await
            .map_err(|e| e.with_field_key(key))
    }

    /// The field mapping shared by this page type
    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// Direct access to the driver, for page-specific interactions the
    /// mapping does not cover
    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Release the driver handle
    pub fn into_driver(self) -> D {
        self.driver
    }

    fn locator_for(&self, key: &str) -> Result<String> {
        self.mapping
            .get(key)
            .map(|spec| spec.locator.clone())
            .ok_or_else(|| Error::UnknownField(key.to_string()))
    }
}
