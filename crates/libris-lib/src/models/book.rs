use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalogue item as it appears in page markup.
///
/// The server renders ids as integers, but the page may hand them over as
/// either strings or numbers, so the id is kept in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn from_number(id: f64) -> Self {
        if id.fract() == 0.0 && id.is_finite() {
            Self(format!("{}", id as i64))
        } else {
            Self(format!("{}", id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Lifecycle state of a book as reported by the server.
///
/// Values are not validated; anything the server sends is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookStatus(String);

impl BookStatus {
    pub const AVAILABLE: &'static str = "available";
    pub const BORROWED: &'static str = "borrowed";
    pub const RESERVED: &'static str = "reserved";
    pub const MAINTENANCE: &'static str = "maintenance";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn borrowed() -> Self {
        Self::new(Self::BORROWED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Badge text: the status with its first character upper-cased.
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn css_class(&self) -> String {
        format!("book-status status-{}", self.0)
    }

    pub fn is_known(&self) -> bool {
        matches!(
            self.0.as_str(),
            Self::AVAILABLE | Self::BORROWED | Self::RESERVED | Self::MAINTENANCE
        )
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
