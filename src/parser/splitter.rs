//! Top-level field splitting.
//!
//! Splits a specification on commas, except commas inside a double-quoted
//! span. The quotes themselves are dropped from the field text. There is no
//! escape syntax: every `"` toggles the quoted state.

use super::error::FormatError;

/// Split `spec` into its raw top-level fields.
pub fn split_fields(spec: &str) -> Result<Vec<String>, FormatError> {
    if spec.is_empty() {
        return Err(FormatError::Empty);
    }

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in spec.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    if in_quotes {
        return Err(FormatError::UnbalancedQuotes(spec.to_string()));
    }
    fields.push(current);

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        assert_eq!(
            split_fields("driver=nvidia,count=1").unwrap(),
            vec!["driver=nvidia", "count=1"]
        );
        assert_eq!(split_fields("all").unwrap(), vec!["all"]);
    }

    #[test]
    fn test_split_quoted_keeps_commas() {
        let fields =
            split_fields("driver=nvidia,\"capabilities=compute,utility\",\"device=0,2\"").unwrap();
        assert_eq!(
            fields,
            vec!["driver=nvidia", "capabilities=compute,utility", "device=0,2"]
        );
    }

    #[test]
    fn test_split_quote_mid_field() {
        assert_eq!(
            split_fields("device=\"0,1\",count=2").unwrap(),
            vec!["device=0,1", "count=2"]
        );
    }

    #[test]
    fn test_split_empty_fields_preserved() {
        assert_eq!(split_fields("all,").unwrap(), vec!["all", ""]);
        assert_eq!(split_fields(",").unwrap(), vec!["", ""]);
    }

    #[test]
    fn test_split_unbalanced() {
        let err = split_fields("\"capabilities=compute,utility").unwrap_err();
        assert!(matches!(err, FormatError::UnbalancedQuotes(_)));
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_fields("").unwrap_err(), FormatError::Empty);
    }
}
