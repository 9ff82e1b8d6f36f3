use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned identifier of a journal event.
///
/// Serialized as a bare JSON number so the wire format stays `"id": 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub i64);

impl EventId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Element id of the rendered entry (`log-<id>`)
    pub fn dom_id(&self) -> String {
        format!("log-{}", self.0)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AggregateId for EventId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(EventId)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A single journal entry.
///
/// `date` and `time` are independent optional text fields; they are never
/// combined into one value or split out of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl Event {
    pub fn from_dto(id: EventId, dto: EventDto) -> Self {
        Self {
            id,
            title: dto.title,
            date: dto.date,
            time: dto.time,
            notes: dto.notes,
        }
    }

    /// Text shown above the title: `date - time`, or whichever part is present
    pub fn when(&self) -> String {
        match (non_blank(&self.date), non_blank(&self.time)) {
            (Some(d), Some(t)) => format!("{} - {}", d, t),
            (Some(d), None) => d.to_string(),
            (None, Some(t)) => t.to_string(),
            (None, None) => String::new(),
        }
    }

    pub fn to_dto(&self) -> EventDto {
        EventDto {
            title: self.title.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            notes: self.notes.clone(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// ============================================================================
// DTO
// ============================================================================

/// Payload of `POST /events/add` and the legacy `POST /add_log`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl EventDto {
    /// Blank date/time become `None`; title and notes are kept verbatim.
    pub fn normalized(mut self) -> Self {
        self.date = self.date.filter(|s| !s.trim().is_empty());
        self.time = self.time.filter(|s| !s.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> Event {
        Event {
            id: EventId(1),
            title: "Run".into(),
            date: Some("2024-01-01".into()),
            time: None,
            notes: "5k".into(),
        }
    }

    #[test]
    fn test_id_is_a_bare_number_on_the_wire() {
        let json = serde_json::to_value(run()).unwrap();
        assert_eq!(json["id"], serde_json::json!(1));
        assert_eq!(json["time"], serde_json::Value::Null);
    }

    #[test]
    fn test_event_without_time_deserializes() {
        let event: Event =
            serde_json::from_str(r#"{"id":1,"title":"Run","date":"2024-01-01","notes":"5k"}"#)
                .unwrap();
        assert_eq!(event, run());
    }

    #[test]
    fn test_dom_id() {
        assert_eq!(EventId(42).dom_id(), "log-42");
        assert_eq!(EventId::from_string(" 7 ").unwrap(), EventId(7));
        assert!(EventId::from_string("seven").is_err());
    }

    #[test]
    fn test_when_line() {
        let mut event = run();
        assert_eq!(event.when(), "2024-01-01");
        event.time = Some("07:30".into());
        assert_eq!(event.when(), "2024-01-01 - 07:30");
        event.date = Some("  ".into());
        assert_eq!(event.when(), "07:30");
        event.time = None;
        assert_eq!(event.when(), "");
    }

    #[test]
    fn test_dto_normalization_keeps_text_verbatim() {
        let dto = EventDto {
            title: " Run ".into(),
            date: Some(String::new()),
            time: Some("07:30".into()),
            notes: "<b>5k</b>".into(),
        }
        .normalized();
        assert_eq!(dto.title, " Run ");
        assert_eq!(dto.date, None);
        assert_eq!(dto.time.as_deref(), Some("07:30"));
        assert_eq!(dto.notes, "<b>5k</b>");
    }
}
