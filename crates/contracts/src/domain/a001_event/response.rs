//! Response envelopes of the event endpoints.
//!
//! The list and update endpoints answer with a `successful` flag, the legacy
//! `/add_log` endpoint with `success`, the delete endpoint with `status`.

use serde::{Deserialize, Serialize};

use super::aggregate::{Event, EventId};

/// `GET /events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventListResponse {
    pub successful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl EventListResponse {
    pub fn ok(events: Vec<Event>) -> Self {
        Self {
            successful: true,
            message: Some("Success in retrieving the events".to_string()),
            events,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            successful: false,
            message: Some(message.into()),
            events: Vec::new(),
        }
    }
}

/// `POST /events/add` and `POST /events/update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    pub successful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
}

impl EventResponse {
    pub fn ok(event: Event, message: impl Into<String>) -> Self {
        Self {
            successful: true,
            message: Some(message.into()),
            event: Some(event),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            successful: false,
            message: Some(message.into()),
            event: None,
        }
    }
}

/// Legacy `POST /add_log`: the created entry flattened into the envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddLogResponse {
    pub success: bool,
    pub message: String,
    pub id: EventId,
    pub title: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: String,
}

impl From<Event> for AddLogResponse {
    fn from(e: Event) -> Self {
        Self {
            success: true,
            message: "Log added successfully!".to_string(),
            id: e.id,
            title: e.title,
            date: e.date,
            time: e.time,
            notes: e.notes,
        }
    }
}

/// `DELETE /delete_log/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteLogResponse {
    pub status: String,
    pub message: String,
}

impl DeleteLogResponse {
    pub fn deleted() -> Self {
        Self {
            status: "success".to_string(),
            message: "Log deleted successfully".to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: "error".to_string(),
            message: "Log not found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_from_backend_example() {
        let body = r#"{"successful":true,"events":[{"id":1,"title":"Run","date":"2024-01-01","notes":"5k"}]}"#;
        let resp: EventListResponse = serde_json::from_str(body).unwrap();
        assert!(resp.successful);
        assert_eq!(resp.message, None);
        assert_eq!(resp.events.len(), 1);
        assert_eq!(resp.events[0].id, EventId(1));
        assert_eq!(resp.events[0].title, "Run");
    }

    #[test]
    fn test_failed_list_response_has_no_events() {
        let resp: EventListResponse =
            serde_json::from_str(r#"{"successful":false,"message":"Error retrieving the events"}"#)
                .unwrap();
        assert!(!resp.successful);
        assert!(resp.events.is_empty());
        assert_eq!(resp.message.as_deref(), Some("Error retrieving the events"));
    }

    #[test]
    fn test_add_log_response_is_flat() {
        let event = Event {
            id: EventId(3),
            title: "Swim".into(),
            date: Some("2024-02-02".into()),
            time: Some("06:00".into()),
            notes: String::new(),
        };
        let json = serde_json::to_value(AddLogResponse::from(event)).unwrap();
        assert_eq!(json["success"], serde_json::json!(true));
        assert_eq!(json["id"], serde_json::json!(3));
        assert_eq!(json["time"], serde_json::json!("06:00"));
    }
}
