//! Kind→action dispatch
//!
//! Walks a page's field mapping against a resolved data record and
//! performs the interaction each field's declared kind calls for.
//! Growing the suite means editing the mapping or the data file, not
//! this module.

use tracing::debug;

use crate::common::Result;
use crate::data::{DataRecord, FieldValue};
use crate::driver::UiDriver;
use crate::report::StepReporter;

use super::mapping::{FieldKind, FieldMapping, FieldSpec};

/// Placeholder substituted into radio locators with the dataset value
const VALUE_PLACEHOLDER: &str = "{value}";

/// Fill a form from a data record
///
/// Fields are visited in mapping declaration order. Mapping keys absent
/// from the record are skipped and left unfilled; record keys absent from
/// the mapping are ignored. Both sides of that asymmetry are deliberate
/// policy, not errors. Dispatch is fail-fast: the first per-field failure
/// aborts the remaining fields and propagates with the field key attached.
pub async fn fill_form_data<D: UiDriver>(
    driver: &mut D,
    mapping: &FieldMapping,
    data: &DataRecord,
    reporter: &dyn StepReporter,
) -> Result<()> {
    for key in data.keys() {
        if !mapping.contains(key) {
            debug!(key = %key, "data key not in field mapping, ignoring");
        }
    }

    for spec in mapping.fields() {
        let Some(value) = data.get(&spec.key) else {
            debug!(key = %spec.key, "no data for field, leaving unfilled");
            continue;
        };

        reporter.step(&format!("Fill field '{}' ({})", spec.key, spec.kind));
        apply_field(driver, spec, value).await.map_err(|e| {
            let err = e.with_field_key(&spec.key);
            reporter.attachment(&format!("Error filling {}", spec.key), &err.to_string());
            err
        })?;
    }

    Ok(())
}

/// Perform the single interaction a field's kind calls for
async fn apply_field<D: UiDriver>(
    driver: &mut D,
    spec: &FieldSpec,
    value: &FieldValue,
) -> Result<()> {
    match spec.kind {
        FieldKind::Textbox | FieldKind::Textarea => {
            driver.clear(&spec.locator).await?;
            driver.fill(&spec.locator, &value.to_text()).await
        }
        FieldKind::Radio => {
            let locator = spec.locator.replace(VALUE_PLACEHOLDER, &value.to_text());
            driver.set_checked(&locator, true).await
        }
        FieldKind::Checkbox => driver.set_checked(&spec.locator, value.is_truthy()).await,
        FieldKind::Dropdown => driver.select(&spec.locator, &value.to_text()).await,
        FieldKind::File => {
            let paths = value.as_paths(&spec.key)?;
            driver.attach_files(&spec.locator, &paths).await
        }
        FieldKind::Custom => {
            if value.is_truthy() {
                driver.click(&spec.locator).await
            } else {
                Ok(())
            }
        }
    }
}
