use crate::error::{ChartError, ChartResult};

/// Checks that `name` is usable as a script variable name.
///
/// Only ASCII identifiers are accepted: a letter, `_` or `$` followed by
/// letters, digits, `_` or `$`.
pub fn validate_identifier(name: &str) -> ChartResult<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(ChartError::Configuration(
            "identifier must not be empty".to_owned(),
        ));
    };
    let head_ok = first.is_ascii_alphabetic() || first == '_' || first == '$';
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if head_ok && tail_ok {
        Ok(())
    } else {
        Err(ChartError::Configuration(format!(
            "`{name}` is not a valid identifier"
        )))
    }
}

/// Upper-cases the first character, leaving the rest untouched.
#[must_use]
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        for name in ["chart1", "_chart", "$chart", "lineChart_2"] {
            assert!(validate_identifier(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_non_identifiers() {
        for name in ["", "1chart", "chart-1", "chart 1", "chärt"] {
            assert!(validate_identifier(name).is_err(), "{name}");
        }
    }

    #[test]
    fn upper_first_only_touches_first_char() {
        assert_eq!(upper_first("chart1"), "Chart1");
        assert_eq!(upper_first("9abc"), "9abc");
        assert_eq!(upper_first(""), "");
    }
}
