pub const CATEGORY: &str = "emails";

// local@domain, domain is a label followed by a dotted tail
pub const PATTERN: &str = r"[a-zA-Z0-9_.+\-]+@[a-zA-Z0-9\-]+\.[a-zA-Z0-9.\-]+";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{PatternMatcher, Rule};

    fn rule() -> Rule {
        Rule::new(CATEGORY, PATTERN).unwrap()
    }

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "a.b+c_d-e@host.io",
            "user@example.com.",   // the tail may end in a dot
            "user@mail.-example-", // and carry dots and hyphens anywhere
            "user@example.c0m",
            "42@123.456",
        ];

        let rule = rule();
        for email in valid_emails {
            assert!(rule.matches(email), "Email should be valid: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid_emails = vec![
            "user@example",          // no dot after the first domain label
            "user@.com",             // empty first label
            "user@sub_domain.com",   // underscore only allowed on the local side
            "user%tag@example.com",  // % not allowed in the local part
            "user@@example.com",
            "user@example.com/path",
        ];

        let rule = rule();
        for email in invalid_emails {
            assert!(!rule.matches(email), "Email should be invalid: {}", email);
        }
    }

    #[test]
    fn test_extract_emails_from_sentence() {
        let found = rule().find_all("Contact support@example.com or sales@example.org today");
        assert_eq!(found, vec!["support@example.com", "sales@example.org"]);

        // A sentence-ending period stays attached to the domain.
        assert_eq!(rule().find_all("Write to a@b.com."), vec!["a@b.com."]);
    }
}
