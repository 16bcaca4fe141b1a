//! gpu-request: parse `--gpus` style device specifications.
//!
//! Turns the compact, comma-delimited syntax container runtimes accept for
//! their `--gpus` flag into the device request records a container creation
//! API expects:
//!
//! ```
//! use gpu_request::parse_device_request;
//!
//! let req = parse_device_request("driver=nvidia,\"device=0,2\"").unwrap();
//! assert_eq!(req.device_ids, vec!["0", "2"]);
//! assert_eq!(req.capabilities.len(), 8);
//! ```

pub mod config;
pub mod opts;
pub mod parser;
pub mod request;

pub use opts::GpuOpts;
pub use parser::{parse_device_request, parse_device_requests, FormatError};
pub use request::{Count, DeviceRequest, Selection};
