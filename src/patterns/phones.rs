pub const CATEGORY: &str = "phones";

// (123) 456-7890 / (123)456.7890, or 123-456-7890 / 123.456.7890.
// The bare form needs the same separator twice, hence two alternatives.
pub const PATTERN: &str = r"\(\d{3}\)\s?\d{3}[\-.]\d{4}|\d{3}-\d{3}-\d{4}|\d{3}\.\d{3}\.\d{4}";
