//! Repeatable `--gpus` option value.
//!
//! Each occurrence of the option appends one parsed request, matching how a
//! container runtime's flag collects repeated values.

use std::fmt;

use crate::parser::{parse_device_request, FormatError};
use crate::request::DeviceRequest;

/// Accumulated values of a repeated `--gpus` option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpuOpts {
    values: Vec<DeviceRequest>,
}

impl GpuOpts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one occurrence and append it. On error nothing is appended.
    pub fn set(&mut self, value: &str) -> Result<(), FormatError> {
        let request = parse_device_request(value)?;
        self.values.push(request);
        Ok(())
    }

    /// Requests collected so far, in the order they were set.
    pub fn value(&self) -> &[DeviceRequest] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Option type name, as shown in help output.
    pub fn kind(&self) -> &'static str {
        "gpu-request"
    }
}

impl From<Vec<DeviceRequest>> for GpuOpts {
    fn from(values: Vec<DeviceRequest>) -> Self {
        Self { values }
    }
}

impl fmt::Display for GpuOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(" "))
    }
}
