pub const CATEGORY: &str = "hashtags";

pub const PATTERN: &str = r"#\w+";
