//! Common display helpers

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Join names for a single table cell
pub fn join_names(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a long description", 10), "a long ...");
    }

    #[test]
    fn test_join_names() {
        assert_eq!(join_names(&[]), "-");
        assert_eq!(
            join_names(&["admin".to_string(), "bob".to_string()]),
            "admin, bob"
        );
    }
}
