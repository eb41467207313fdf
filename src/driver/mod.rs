//! UI driver capability boundary
//!
//! Page objects and the action dispatcher depend only on the [`UiDriver`]
//! trait, never on a concrete automation-library handle. The browser
//! session behind an implementation is owned and lifecycle-managed by the
//! test runner's session bootstrap, not by this crate.

pub mod mock;

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::common::Result;

pub use mock::{DriverCall, MockDriver, MockFailure};

/// Capability interface over an active page/session
///
/// Locator-level failures map to [`crate::Error::ElementNotFound`] and
/// [`crate::Error::ElementNotInteractable`]; implementations apply the
/// configured timeout before giving up on a locator.
#[async_trait]
pub trait UiDriver: Send {
    /// Navigate to a URL
    async fn open(&mut self, url: &str) -> Result<()>;

    /// Clear the existing content of an input
    async fn clear(&mut self, locator: &str) -> Result<()>;

    /// Enter text into an input
    async fn fill(&mut self, locator: &str, text: &str) -> Result<()>;

    /// Select the dropdown option whose visible label or underlying value
    /// equals `option`
    async fn select(&mut self, locator: &str, option: &str) -> Result<()>;

    /// Set the checked state of a checkbox or radio option
    async fn set_checked(&mut self, locator: &str, checked: bool) -> Result<()>;

    /// Click an element
    async fn click(&mut self, locator: &str) -> Result<()>;

    /// Attach one or more files to a file input
    async fn attach_files(&mut self, locator: &str, paths: &[PathBuf]) -> Result<()>;

    /// Whether an element is currently visible
    async fn is_visible(&mut self, locator: &str) -> Result<bool>;

    /// Wait until an element is visible, up to `timeout`
    async fn wait_for(&mut self, locator: &str, timeout: Duration) -> Result<()>;
}
