use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`: no whitespace, a single `@`, and a `.` inside the domain.
/// U+FEFF is listed explicitly because `\s` here does not cover it.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("Invalid email shape regex")
});

/// A trimmed, lower-cased email address with a `local@domain.tld` shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    /// Normalizes `raw` and checks its shape. Returns `None` when the
    /// normalized value is not a plausible address. No MX/DNS lookups.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim_matches(is_trimmed_char).to_lowercase();
        if EMAIL_SHAPE.is_match(&normalized) {
            Some(Self(normalized))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_trimmed_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
