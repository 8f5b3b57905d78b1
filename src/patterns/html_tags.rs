pub const CATEGORY: &str = "html_tags";

pub const PATTERN: &str = r"<[^>]+>";
