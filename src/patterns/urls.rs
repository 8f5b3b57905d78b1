pub const CATEGORY: &str = "urls";

// Scheme plus everything up to whitespace, angle brackets or a double quote
pub const PATTERN: &str = r#"https?://[^\s<>"]+"#;
