use regex::Regex;

/// Shared validation for user-entered name fragments (part number,
/// description, vendor): at least three characters, none of the characters
/// `\ / : * ? < > | "` that break Windows paths.
pub fn is_valid_name(text: &str) -> bool {
    let re = Regex::new(r#"^[^\\/:*?<>|"]{3,}$"#).expect("naming rule is a valid pattern");
    re.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(is_valid_name("PV001_T004"));
        assert!(is_valid_name("Deckel"));
        assert!(is_valid_name("Gehäuse links"));
    }

    #[test]
    fn rejects_short_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("AB"));
    }

    #[test]
    fn rejects_path_breaking_characters() {
        for text in [
            r"Deckel\oben",
            "Deckel/oben",
            "M6:1",
            "Deckel*",
            "Deckel?",
            "<Deckel>",
            "a|b|c",
            "Zoll\"6\"",
        ] {
            assert!(!is_valid_name(text), "{text:?} should be rejected");
        }
    }
}
