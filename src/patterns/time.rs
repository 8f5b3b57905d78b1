pub const CATEGORY: &str = "time";

// 12-hour clock with AM/PM first, then 24-hour clock
pub const PATTERN: &str = r"(?:1[0-2]|0?[1-9]):[0-5]\d\s?(?:AM|PM)|(?:[01]?\d|2[0-3]):[0-5]\d";
