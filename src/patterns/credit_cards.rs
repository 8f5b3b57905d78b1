pub const CATEGORY: &str = "credit_cards";

// Four groups of four digits, each of the first three optionally followed by `-` or a space
pub const PATTERN: &str = r"(?:\d{4}[\- ]?){3}\d{4}";
