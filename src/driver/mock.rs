//! Recording driver for tests and dry runs
//!
//! Records every interaction instead of touching a browser, and can be
//! scripted to fail on chosen locators. Backs the crate's own tests and
//! the CLI dry run; downstream page objects can use it the same way.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::common::{Error, Result};

use super::UiDriver;

/// One recorded driver interaction
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    Open { url: String },
    Clear { locator: String },
    Fill { locator: String, text: String },
    Select { locator: String, option: String },
    SetChecked { locator: String, checked: bool },
    Click { locator: String },
    AttachFiles { locator: String, paths: Vec<PathBuf> },
    IsVisible { locator: String },
    WaitFor { locator: String },
}

impl DriverCall {
    /// Short human-readable rendering for dry-run output
    pub fn describe(&self) -> String {
        match self {
            Self::Open { url } => format!("open {url}"),
            Self::Clear { locator } => format!("clear {locator}"),
            Self::Fill { locator, text } => format!("fill {locator} = {text:?}"),
            Self::Select { locator, option } => format!("select {locator} = {option:?}"),
            Self::SetChecked { locator, checked } => {
                format!("set-checked {locator} = {checked}")
            }
            Self::Click { locator } => format!("click {locator}"),
            Self::AttachFiles { locator, paths } => {
                let names: Vec<String> =
                    paths.iter().map(|p| p.display().to_string()).collect();
                format!("attach {locator} = [{}]", names.join(", "))
            }
            Self::IsVisible { locator } => format!("is-visible {locator}"),
            Self::WaitFor { locator } => format!("wait-for {locator}"),
        }
    }
}

/// Scripted failure mode for a locator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    NotFound,
    NotInteractable,
}

/// A [`UiDriver`] that records interactions in memory
#[derive(Debug, Default)]
pub struct MockDriver {
    calls: Vec<DriverCall>,
    fail_on: HashMap<String, MockFailure>,
    hidden: Vec<String>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a failure for every interaction with a locator
    pub fn fail_on(&mut self, locator: &str, failure: MockFailure) {
        self.fail_on.insert(locator.to_string(), failure);
    }

    /// Script a locator to report as not visible
    pub fn hide(&mut self, locator: &str) {
        self.hidden.push(locator.to_string());
    }

    /// Interactions recorded so far, in order
    pub fn calls(&self) -> &[DriverCall] {
        &self.calls
    }

    /// Drain the recorded interactions
    pub fn take_calls(&mut self) -> Vec<DriverCall> {
        std::mem::take(&mut self.calls)
    }

    fn check(&self, locator: &str) -> Result<()> {
        match self.fail_on.get(locator) {
            Some(MockFailure::NotFound) => Err(Error::element_not_found(locator)),
            Some(MockFailure::NotInteractable) => {
                Err(Error::element_not_interactable(locator))
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UiDriver for MockDriver {
    async fn open(&mut self, url: &str) -> Result<()> {
        self.calls.push(DriverCall::Open { url: url.to_string() });
        Ok(())
    }

    async fn clear(&mut self, locator: &str) -> Result<()> {
        self.check(locator)?;
        self.calls.push(DriverCall::Clear { locator: locator.to_string() });
        Ok(())
    }

    async fn fill(&mut self, locator: &str, text: &str) -> Result<()> {
        self.check(locator)?;
        self.calls.push(DriverCall::Fill {
            locator: locator.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn select(&mut self, locator: &str, option: &str) -> Result<()> {
        self.check(locator)?;
        self.calls.push(DriverCall::Select {
            locator: locator.to_string(),
            option: option.to_string(),
        });
        Ok(())
    }

    async fn set_checked(&mut self, locator: &str, checked: bool) -> Result<()> {
        self.check(locator)?;
        self.calls.push(DriverCall::SetChecked {
            locator: locator.to_string(),
            checked,
        });
        Ok(())
    }

    async fn click(&mut self, locator: &str) -> Result<()> {
        self.check(locator)?;
        self.calls.push(DriverCall::Click { locator: locator.to_string() });
        Ok(())
    }

    async fn attach_files(&mut self, locator: &str, paths: &[PathBuf]) -> Result<()> {
        self.check(locator)?;
        self.calls.push(DriverCall::AttachFiles {
            locator: locator.to_string(),
            paths: paths.to_vec(),
        });
        Ok(())
    }

    async fn is_visible(&mut self, locator: &str) -> Result<bool> {
        self.calls.push(DriverCall::IsVisible { locator: locator.to_string() });
        Ok(!self.hidden.iter().any(|l| l == locator))
    }

    async fn wait_for(&mut self, locator: &str, _timeout: Duration) -> Result<()> {
        self.calls.push(DriverCall::WaitFor { locator: locator.to_string() });
        if self.hidden.iter().any(|l| l == locator) {
            return Err(Error::element_not_found(locator));
        }
        self.check(locator)
    }
}
