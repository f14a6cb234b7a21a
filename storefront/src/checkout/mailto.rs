//! mailto link construction

use std::fmt;

use super::composer::OrderEmail;

/// `mailto:` link carrying a percent-encoded subject and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink(String);

impl MailtoLink {
    /// Build `mailto:<recipient>?subject=<encoded>&body=<encoded>`
    ///
    /// Every byte outside `A-Z a-z 0-9 - _ . ~` is percent-encoded, so line
    /// breaks in the body travel as `%0A`.
    pub fn new(recipient: &str, email: &OrderEmail) -> Self {
        Self(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&email.subject),
            urlencoding::encode(&email.body)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MailtoLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
