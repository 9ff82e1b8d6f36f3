use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types of aggregates
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id the way it appears in URLs and DOM ids
    fn as_string(&self) -> String;

    /// Parse an id from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}
