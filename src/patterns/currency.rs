pub const CATEGORY: &str = "currency";

// $ amounts with optional thousands groups and cents
pub const PATTERN: &str = r"\$\d{1,3}(?:,\d{3})*(?:\.\d{2})?";
