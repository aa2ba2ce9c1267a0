//! Shared string helpers for code generation.

/// Lowercase the first character (e.g., "Name" -> "name")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// True if the first character is an uppercase letter
pub fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// True if uppercasing the string leaves it unchanged (e.g., "URL", "MAX_SIZE", "ID2")
pub fn is_all_uppercase(s: &str) -> bool {
    s.to_uppercase() == s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Name"), "name");
        assert_eq!(lower_first("HTTPClient"), "hTTPClient");
        assert_eq!(lower_first("x"), "x");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_starts_uppercase() {
        assert!(starts_uppercase("Foo"));
        assert!(!starts_uppercase("foo"));
        assert!(!starts_uppercase("_Foo"));
        assert!(!starts_uppercase(""));
    }

    #[test]
    fn test_is_all_uppercase() {
        assert!(is_all_uppercase("URL"));
        assert!(is_all_uppercase("ID"));
        assert!(is_all_uppercase("MAX_SIZE"));
        assert!(!is_all_uppercase("Url"));
        assert!(!is_all_uppercase("foo"));
    }
}
