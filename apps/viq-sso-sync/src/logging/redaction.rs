//! Masking of credentials in traced HTTP traffic

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// The replacement string used for redacted values
pub const REDACTED: &str = "[REDACTED]";

static REDACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Authorization header with Bearer token
        r"(?P<keep>Authorization:\s*Bearer\s+)\S+",
        // Login body
        r#"(?P<keep>"password"\s*:\s*")(?:[^"\\]|\\.)*"#,
        // Login response
        r#"(?P<keep>"access_token"\s*:\s*")(?:[^"\\]|\\.)*"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid redaction pattern"))
    .collect()
});

/// Redactor for sensitive data in log text
#[derive(Debug, Default, Clone, Copy)]
pub struct Redactor;

impl Redactor {
    pub fn new() -> Self {
        Self
    }

    /// Mask passwords, access tokens and bearer headers in `input`
    pub fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let mut result: Cow<'a, str> = Cow::Borrowed(input);

        for pattern in REDACTION_PATTERNS.iter() {
            if pattern.is_match(&result) {
                let replaced = pattern
                    .replace_all(&result, format!("${{keep}}{REDACTED}").as_str())
                    .into_owned();
                result = Cow::Owned(replaced);
            }
        }

        result
    }
}
