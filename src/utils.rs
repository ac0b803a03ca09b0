//! Small helpers shared across the pipeline.

/// Truncate a string for logging purposes.
///
/// Strings of at most `max` characters come back unchanged. Longer ones are
/// cut to `max` characters and get `…(+N bytes)` appended, N being the number
/// of bytes dropped. The cut always lands on a character boundary.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "<tbody></tbody>";
        assert_eq!(truncate_for_log(s, 100), "<tbody></tbody>");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let result = truncate_for_log("ééé", 1);
        assert_eq!(result, "é…(+4 bytes)");
    }
}
