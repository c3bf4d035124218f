//! Environment variable validation with helpful warnings
//!
//! Invalid values fall back to a default after printing a warning with a
//! typo suggestion, so a misspelt variable never aborts a deploy.

use std::io::Write;

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `default` with a warning on stderr if invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, default: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, default, &mut std::io::stderr())
    }

    /// Parse with a custom writer for the warning
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        let suggestion = suggest(value, self.valid_values)
            .map(|s| format!(". Did you mean '{}'?", s))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, value, suggestion
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        default
    }
}

/// Parse common boolean spellings
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];

/// Largest edit distance still worth suggesting
const MAX_SUGGESTION_EDITS: usize = 2;

/// Closest candidate within two edits, if any
pub fn suggest<'c>(value: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let input = value.to_lowercase();
    candidates
        .iter()
        .filter(|c| c.len().abs_diff(input.len()) <= MAX_SUGGESTION_EDITS)
        .map(|&c| (c, edit_distance(&input, c)))
        .filter(|&(_, dist)| dist > 0 && dist <= MAX_SUGGESTION_EDITS)
        .min_by_key(|&(_, dist)| dist)
        .map(|(c, _)| c)
}

/// Edit distance between two ASCII config keys, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.as_bytes().iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + usize::from(ac != bc));
            diag = above;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hosts", "hosts"), 0);
        assert_eq!(edit_distance("host", "hosts"), 1);
        assert_eq!(edit_distance("ouput_dir", "output_dir"), 1);
        assert_eq!(edit_distance("prot", "port"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" no "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_valid_value_passes_through() {
        let validator = EnvVarValidator::new("WEBSHIP_STOP_ON_FAILURE", BOOL_VALUES);
        let mut output = Vec::new();
        let result = validator.parse_with_writer("yes", parse_bool, false, &mut output);
        assert!(result);
        assert!(output.is_empty());
    }

    #[test]
    fn test_invalid_value_warns_and_defaults() {
        let validator = EnvVarValidator::new("WEBSHIP_STOP_ON_FAILURE", BOOL_VALUES);
        let mut output = Vec::new();
        let result = validator.parse_with_writer("ture", parse_bool, false, &mut output);
        assert!(!result);

        let msg = String::from_utf8(output).unwrap();
        assert!(msg.contains("Warning: Invalid WEBSHIP_STOP_ON_FAILURE value 'ture'"));
        assert!(msg.contains("Did you mean 'true'?"), "{msg}");
        assert!(msg.contains("Valid values: true, false"));
    }

    #[test]
    fn test_suggests_closest_key() {
        assert_eq!(suggest("hostz", &["port", "hosts", "user"]), Some("hosts"));
        assert_eq!(suggest("Hosts", &["hosts"]), None);
    }

    #[test]
    fn test_no_suggestion_for_distant_value() {
        assert_eq!(suggest("something_else", BOOL_VALUES), None);
    }
}
