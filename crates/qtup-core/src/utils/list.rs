//! Parsing helpers for space-delimited list inputs.

/// Split a space-delimited input into tokens, ignoring surrounding and
/// repeated whitespace. An empty or all-whitespace input yields no tokens.
pub fn split_list(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("qtcharts qtwebengine"), vec!["qtcharts", "qtwebengine"]);
        assert_eq!(split_list("  qtcharts   "), vec!["qtcharts"]);
        assert!(split_list("").is_empty());
        assert!(split_list("   ").is_empty());
    }
}
