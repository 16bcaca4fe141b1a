//! Errors produced while parsing a GPU specification string.

use thiserror::Error;

/// Every way a specification string can be rejected.
///
/// Each variant carries the offending text so the message points the user
/// at the field they need to fix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("empty GPU request specification")]
    Empty,

    #[error("unbalanced quotes in GPU request '{0}'")]
    UnbalancedQuotes(String),

    #[error("empty field in GPU request '{0}'")]
    EmptyField(String),

    #[error("unexpected key '{key}' in '{field}'")]
    UnknownKey { key: String, field: String },

    #[error("gpu request key '{0}' can be specified only once")]
    DuplicateKey(String),

    #[error("invalid count ({0}): value must be either \"all\" or an integer")]
    InvalidCount(String),

    #[error("driver must not be empty in '{0}'")]
    EmptyDriver(String),

    #[error("cannot request all devices and a device list in the same GPU request '{0}'")]
    SelectionConflict(String),

    #[error("malformed {key} list in '{field}'")]
    MalformedList { key: &'static str, field: String },

    #[error("invalid option '{entry}' in '{field}': expected key=value")]
    InvalidOption { entry: String, field: String },
}
