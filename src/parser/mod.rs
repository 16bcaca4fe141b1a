//! GPU specification parsing.
//!
//! A specification goes through three stages:
//!
//! - [`splitter`]: top-level fields, honouring quoted spans
//! - [`field`]: each field classified into a typed [`field::Field`]
//! - [`builder`]: fields folded into a [`DeviceRequest`] with defaults applied
//!
//! Parsing is pure: no I/O, no shared state.

pub mod builder;
pub mod error;
pub mod field;
pub mod splitter;

use tracing::debug;

use crate::request::DeviceRequest;
use builder::RequestBuilder;

pub use error::FormatError;

/// Parse one specification string into a device request.
pub fn parse_device_request(spec: &str) -> Result<DeviceRequest, FormatError> {
    let mut builder = RequestBuilder::new();
    for raw in splitter::split_fields(spec)? {
        builder.push(field::classify(&raw)?)?;
    }
    let request = builder.build(spec)?;

    debug!(
        spec,
        driver = %request.driver,
        count = request.count,
        devices = request.device_ids.len(),
        "Parsed GPU request"
    );

    Ok(request)
}

/// Parse several specification strings, one request each, in order.
///
/// Stops at the first invalid string; no partial result is returned.
pub fn parse_device_requests<I, S>(specs: I) -> Result<Vec<DeviceRequest>, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    specs
        .into_iter()
        .map(|spec| parse_device_request(spec.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        let req = parse_device_request("driver=amd,2").unwrap();
        assert_eq!(req.driver, "amd");
        assert_eq!(req.count, 2);
    }

    #[test]
    fn test_parse_batch_preserves_order() {
        let reqs = parse_device_requests(["1", "driver=amd", "\"device=3\""]).unwrap();
        assert_eq!(reqs.len(), 3);
        assert_eq!(reqs[0].count, 1);
        assert_eq!(reqs[1].driver, "amd");
        assert_eq!(reqs[2].device_ids, vec!["3".to_string()]);
    }

    #[test]
    fn test_parse_batch_fails_fast() {
        let err = parse_device_requests(vec!["all", "bogus=1", "\"unclosed"]).unwrap_err();
        assert!(matches!(err, FormatError::UnknownKey { .. }));
    }

    #[test]
    fn test_parse_empty_batch() {
        let reqs = parse_device_requests(Vec::<String>::new()).unwrap();
        assert!(reqs.is_empty());
    }
}
