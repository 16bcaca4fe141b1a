//! Folds classified fields into a [`DeviceRequest`].
//!
//! The builder is local to one parse call. Each key may be set once; the
//! defaults for missing fields are applied in [`RequestBuilder::build`].

use std::collections::{BTreeMap, HashSet};

use super::error::FormatError;
use super::field::Field;
use crate::request::{default_capabilities, Count, DeviceRequest, DEFAULT_DRIVER};

/// Accumulates the fields of one specification string.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    driver: Option<String>,
    count: Option<Count>,
    device_ids: Option<Vec<String>>,
    capabilities: Option<Vec<String>>,
    options: Option<BTreeMap<String, String>>,
    seen: HashSet<&'static str>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one field. Fails if its key was already set.
    pub fn push(&mut self, field: Field) -> Result<(), FormatError> {
        if !self.seen.insert(field.key()) {
            return Err(FormatError::DuplicateKey(field.key().to_string()));
        }

        match field {
            Field::Shorthand(count) | Field::Count(count) => self.count = Some(count),
            Field::Driver(driver) => self.driver = Some(driver),
            Field::Capabilities(caps) => self.capabilities = Some(caps),
            Field::Devices(ids) => self.device_ids = Some(ids),
            Field::Options(options) => self.options = Some(options),
        }
        Ok(())
    }

    /// Validate the selection and apply defaults.
    ///
    /// `spec` is only used for error messages.
    pub fn build(self, spec: &str) -> Result<DeviceRequest, FormatError> {
        let device_ids = self.device_ids.unwrap_or_default();

        let count = match (self.count, device_ids.is_empty()) {
            (Some(Count::All), false) => {
                return Err(FormatError::SelectionConflict(spec.to_string()))
            }
            (Some(count), _) => count.as_api_value(),
            (None, true) => Count::All.as_api_value(),
            (None, false) => 0,
        };

        let capabilities = match self.capabilities {
            Some(caps) => vec![caps],
            None => default_capabilities(),
        };

        Ok(DeviceRequest {
            driver: self.driver.unwrap_or_else(|| DEFAULT_DRIVER.to_string()),
            count,
            device_ids,
            capabilities,
            options: self.options.unwrap_or_default(),
        })
    }
}
