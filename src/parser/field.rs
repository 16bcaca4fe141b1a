//! Field classification.
//!
//! Turns one raw field into a typed [`Field`]. A field without `=` is the
//! count shorthand; otherwise the text before the first `=` selects the
//! handler and the rest is its payload.

use std::collections::BTreeMap;

use super::error::FormatError;
use crate::request::{Count, GPU_CAPABILITY};

/// A classified top-level field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Bare `all`, `-1` or `<n>`.
    Shorthand(Count),
    /// `driver=<name>`.
    Driver(String),
    /// `count=all|<n>`.
    Count(Count),
    /// `capabilities=a,b,...`; always contains `gpu`.
    Capabilities(Vec<String>),
    /// `device=id,id,...`.
    Devices(Vec<String>),
    /// `options=k=v,k=v,...`.
    Options(BTreeMap<String, String>),
}

impl Field {
    /// Key this field occupies, for duplicate detection. The shorthand
    /// occupies `count`.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Shorthand(_) | Field::Count(_) => "count",
            Field::Driver(_) => "driver",
            Field::Capabilities(_) => "capabilities",
            Field::Devices(_) => "device",
            Field::Options(_) => "options",
        }
    }
}

/// Classify one raw field.
pub fn classify(field: &str) -> Result<Field, FormatError> {
    if field.is_empty() {
        return Err(FormatError::EmptyField(field.to_string()));
    }

    let Some((key, value)) = field.split_once('=') else {
        return field.parse().map(Field::Shorthand);
    };

    match key {
        "driver" => {
            if value.is_empty() {
                return Err(FormatError::EmptyDriver(field.to_string()));
            }
            Ok(Field::Driver(value.to_string()))
        }
        "count" => value.parse().map(Field::Count),
        "capabilities" => parse_capabilities(value, field).map(Field::Capabilities),
        "device" => split_list("device", value, field).map(Field::Devices),
        "options" => parse_options(value, field).map(Field::Options),
        _ => Err(FormatError::UnknownKey {
            key: key.to_string(),
            field: field.to_string(),
        }),
    }
}

fn split_list(key: &'static str, value: &str, field: &str) -> Result<Vec<String>, FormatError> {
    value
        .split(',')
        .map(|token| {
            if token.is_empty() {
                Err(FormatError::MalformedList {
                    key,
                    field: field.to_string(),
                })
            } else {
                Ok(token.to_string())
            }
        })
        .collect()
}

fn parse_capabilities(value: &str, field: &str) -> Result<Vec<String>, FormatError> {
    let mut caps: Vec<String> = Vec::new();
    for cap in split_list("capabilities", value, field)? {
        if !caps.contains(&cap) {
            caps.push(cap);
        }
    }
    if !caps.iter().any(|cap| cap == GPU_CAPABILITY) {
        caps.push(GPU_CAPABILITY.to_string());
    }
    Ok(caps)
}

fn parse_options(value: &str, field: &str) -> Result<BTreeMap<String, String>, FormatError> {
    let mut options = BTreeMap::new();
    for entry in split_list("options", value, field)? {
        let Some((k, v)) = entry.split_once('=').filter(|(k, _)| !k.is_empty()) else {
            return Err(FormatError::InvalidOption {
                entry: entry.clone(),
                field: field.to_string(),
            });
        };
        options.insert(k.to_string(), v.to_string());
    }
    Ok(options)
}
