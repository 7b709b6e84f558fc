//! Shared newtypes used across domain modules.
//!
//! Serialization-transparent: they serialize/deserialize identically to the raw
//! string the backend sends.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// A normalized stock ticker symbol (e.g. `"AAPL"`).
///
/// Construction through [`Symbol::parse`] trims surrounding whitespace and
/// upper-cases the input; blank input yields `None`. This is the single seam
/// where user-typed search text becomes a request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Normalize user input into a symbol. Returns `None` when the trimmed
    /// input is empty.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_uppercases() {
        let sym = Symbol::parse("  msft ").unwrap();
        assert_eq!(sym.as_str(), "MSFT");
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert!(Symbol::parse("").is_none());
        assert!(Symbol::parse("   ").is_none());
    }

    #[test]
    fn test_parse_keeps_already_normalized() {
        let sym = Symbol::parse("AAPL").unwrap();
        assert_eq!(sym.to_string(), "AAPL");
    }
}
