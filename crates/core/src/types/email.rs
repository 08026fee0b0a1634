//! Contact email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A contact email address.
///
/// Unlike a user-supplied address, the contact email comes from trusted
/// site content and is never validated: whatever the author wrote is what
/// the `mailto:` link points at. A malformed address produces a dead link,
/// not an error.
///
/// ## Examples
///
/// ```
/// use folio_core::Email;
///
/// let email = Email::new("someone@example.com");
/// assert_eq!(email.mailto_href(), "mailto:someone@example.com");
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Wrap an address as-is.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the address is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the `mailto:` hyperlink target for this address.
    #[must_use]
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.as_str())
    }

    /// Returns the domain part of the email (after the @).
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
