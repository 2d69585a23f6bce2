use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Identifier type of a list record
pub trait RecordKey:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + fmt::Debug + fmt::Display
{
    /// Convert the id into its path/string form
    fn as_string(&self) -> String;

    /// Parse an id from its path/string form
    fn from_string(s: &str) -> Result<Self, String>;

    /// Build the id handed out for the given sequence number.
    fn from_sequence(sequence: u64) -> Self;

    /// Sequence number encoded in the id, if the id is sequential.
    fn sequence(&self) -> Option<u64>;
}

/// Locally assigned sequential identifier (clients, inquiries)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RecordKey for RecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|e| format!("Invalid record id '{}': {}", s, e))
    }

    fn from_sequence(sequence: u64) -> Self {
        RecordId(sequence)
    }

    fn sequence(&self) -> Option<u64> {
        Some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_parses_and_formats() {
        assert_eq!(RecordId::from_string("42"), Ok(RecordId(42)));
        assert_eq!(RecordId(7).as_string(), "7");
        assert!(RecordId::from_string("abc").is_err());
        assert!(RecordId::from_string("-1").is_err());
    }

    #[test]
    fn record_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&RecordId(3)).unwrap();
        assert_eq!(json, "3");
        let back: RecordId = serde_json::from_str("3").unwrap();
        assert_eq!(back, RecordId(3));
    }
}
