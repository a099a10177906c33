//! US ZIP code validation.

use std::fmt;
use std::str::FromStr;

use crate::FeedError;

/// A five-digit US ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ZipCode {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(ZipCode(s.to_string()))
        } else {
            Err(FeedError::InvalidZip(s.to_string()))
        }
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
