//! Device request types handed to the container creation API.
//!
//! A [`DeviceRequest`] is the wire shape the container API expects in its
//! device request list. Inside the crate the device selection is modelled as
//! [`Count`]; it is lowered to the API's integer form (`-1` = all devices)
//! only when the request is built.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parser::{parse_device_request, FormatError};

/// Driver used when a specification does not name one.
pub const DEFAULT_DRIVER: &str = "nvidia";

/// Capability implicitly added to every explicit capability set.
pub const GPU_CAPABILITY: &str = "gpu";

/// Alternatives installed when no `capabilities=` field is given.
///
/// Each entry is its own single-element set, so any one of them is
/// sufficient on its own.
pub const DEFAULT_CAPABILITIES: [&str; 8] = [
    "gpu", "nvidia", "compute", "compat32", "graphics", "utility", "video", "display",
];

/// How many devices a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Count {
    /// Every available device (`all` / `-1`).
    All,
    /// Exactly `n` devices.
    Exact(u32),
}

impl Count {
    /// The integer the container API uses for this count.
    pub fn as_api_value(&self) -> i64 {
        match self {
            Count::All => -1,
            Count::Exact(n) => i64::from(*n),
        }
    }
}

impl FromStr for Count {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Count::All);
        }
        match s.parse::<i64>() {
            Ok(-1) => Ok(Count::All),
            Ok(n) => u32::try_from(n)
                .map(Count::Exact)
                .map_err(|_| FormatError::InvalidCount(s.to_string())),
            Err(_) => Err(FormatError::InvalidCount(s.to_string())),
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::All => write!(f, "all"),
            Count::Exact(n) => write!(f, "{n}"),
        }
    }
}

/// The device selection a request carries, lifted back out of the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Select by count.
    Count(Count),
    /// Select the listed device IDs, with an optional count passed along.
    Devices {
        ids: &'a [String],
        count: Option<Count>,
    },
}

/// One device allocation request, shaped like the container API's
/// `DeviceRequest` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRequest {
    /// Device backend (e.g. "nvidia").
    #[serde(rename = "Driver")]
    pub driver: String,

    /// Number of devices; `-1` means all, `0` means "use `device_ids`".
    #[serde(rename = "Count")]
    pub count: i64,

    /// Explicit device identifiers, in the order given.
    #[serde(rename = "DeviceIDs", default, skip_serializing_if = "Vec::is_empty")]
    pub device_ids: Vec<String>,

    /// OR'd alternatives; every capability in one inner set must be satisfied.
    #[serde(rename = "Capabilities")]
    pub capabilities: Vec<Vec<String>>,

    /// Driver-specific options.
    #[serde(rename = "Options", default)]
    pub options: BTreeMap<String, String>,
}

/// The default capability table: eight single-element alternatives.
pub fn default_capabilities() -> Vec<Vec<String>> {
    DEFAULT_CAPABILITIES
        .iter()
        .map(|cap| vec![cap.to_string()])
        .collect()
}

impl DeviceRequest {
    /// Device selection as a [`Selection`].
    pub fn selection(&self) -> Selection<'_> {
        let count = match self.count {
            -1 => Some(Count::All),
            n => u32::try_from(n).ok().filter(|n| *n > 0).map(Count::Exact),
        };
        if self.device_ids.is_empty() {
            Selection::Count(count.unwrap_or(Count::Exact(0)))
        } else {
            Selection::Devices {
                ids: &self.device_ids,
                count,
            }
        }
    }

    /// Whether the capabilities are the untouched default table.
    pub fn has_default_capabilities(&self) -> bool {
        self.capabilities == default_capabilities()
    }
}

impl FromStr for DeviceRequest {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_device_request(s)
    }
}

/// Renders the request back into specification syntax.
///
/// Parsing the output yields an equal request.
impl fmt::Display for DeviceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.driver.contains(',') {
            write!(f, "\"driver={}\"", self.driver)?;
        } else {
            write!(f, "driver={}", self.driver)?;
        }

        match self.selection() {
            Selection::Count(count) => write!(f, ",count={count}")?,
            Selection::Devices { ids, count } => {
                if let Some(count) = count {
                    write!(f, ",count={count}")?;
                }
                write!(f, ",\"device={}\"", ids.join(","))?;
            }
        }

        if !self.has_default_capabilities() {
            if let Some(set) = self.capabilities.first() {
                // Only a trailing `gpu` is the implicit one.
                let caps = match set.split_last() {
                    Some((last, rest)) if last == GPU_CAPABILITY => rest,
                    _ => set.as_slice(),
                };
                let rendered = if caps.is_empty() {
                    GPU_CAPABILITY.to_string()
                } else {
                    caps.join(",")
                };
                write!(f, ",\"capabilities={rendered}\"")?;
            }
        }

        if !self.options.is_empty() {
            let pairs: Vec<String> = self
                .options
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            write!(f, ",\"options={}\"", pairs.join(","))?;
        }

        Ok(())
    }
}
