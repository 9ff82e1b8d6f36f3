use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_event::aggregate::{Event, EventDto, EventId};
use contracts::domain::a001_event::response::{
    AddLogResponse, DeleteLogResponse, EventListResponse, EventResponse,
};

use crate::domain::a001_event::service::{self, EventServiceError, ServiceResult};
use crate::shared::data::db::get_connection;

/// GET /events
pub async fn list_all() -> (StatusCode, Json<EventListResponse>) {
    list_response(service::list_all(get_connection()).await)
}

/// POST /events/add
pub async fn add(Json(dto): Json<EventDto>) -> (StatusCode, Json<EventResponse>) {
    event_response(
        service::create(get_connection(), dto).await,
        "Event added successfully",
    )
}

/// POST /events/update
pub async fn update(Json(event): Json<Event>) -> (StatusCode, Json<EventResponse>) {
    event_response(
        service::update(get_connection(), event).await,
        "Event updated successfully",
    )
}

/// DELETE /delete_log/:id
pub async fn delete_log(Path(id): Path<i64>) -> (StatusCode, Json<DeleteLogResponse>) {
    delete_response(service::delete(get_connection(), EventId(id)).await)
}

/// POST /add_log (legacy flat envelope)
pub async fn add_log(
    Json(dto): Json<EventDto>,
) -> Result<Json<AddLogResponse>, (StatusCode, Json<serde_json::Value>)> {
    match service::create(get_connection(), dto).await {
        Ok(event) => Ok(Json(event.into())),
        Err(e) => {
            tracing::error!("add_log failed: {e:#}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"status": "error", "message": e.to_string()})),
            ))
        }
    }
}

fn list_response(result: ServiceResult<Vec<Event>>) -> (StatusCode, Json<EventListResponse>) {
    match result {
        Ok(events) => (StatusCode::OK, Json(EventListResponse::ok(events))),
        Err(e) => {
            tracing::error!("listing events failed: {e:#}");
            (
                StatusCode::NOT_FOUND,
                Json(EventListResponse::failed("Error retrieving the events")),
            )
        }
    }
}

fn event_response(
    result: ServiceResult<Event>,
    success_message: &str,
) -> (StatusCode, Json<EventResponse>) {
    match result {
        Ok(event) => (
            StatusCode::OK,
            Json(EventResponse::ok(event, success_message)),
        ),
        Err(EventServiceError::NotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(EventResponse::failed(format!("Event {id} not found"))),
        ),
        Err(e) => {
            tracing::error!("event write failed: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(EventResponse::failed("Error saving the event")),
            )
        }
    }
}

fn delete_response(result: ServiceResult<()>) -> (StatusCode, Json<DeleteLogResponse>) {
    match result {
        Ok(()) => (StatusCode::OK, Json(DeleteLogResponse::deleted())),
        Err(EventServiceError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(DeleteLogResponse::not_found()))
        }
        Err(e) => {
            tracing::error!("delete failed: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DeleteLogResponse {
                    status: "error".to_string(),
                    message: "Error deleting the log".to_string(),
                }),
            )
        }
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
    fn test_list_ok() {
        let (status, Json(body)) = list_response(Ok(vec![run()]));
        assert_eq!(status, StatusCode::OK);
        assert!(body.successful);
        assert_eq!(body.events, vec![run()]);
    }

    #[test]
    fn test_list_storage_failure() {
        let (status, Json(body)) = list_response(Err(anyhow::anyhow!("disk").into()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.successful);
        assert!(body.events.is_empty());
    }

    #[test]
    fn test_update_not_found() {
        let (status, Json(body)) =
            event_response(Err(EventServiceError::NotFound(EventId(9))), "ok");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.successful);
        assert_eq!(body.event, None);
    }

    #[test]
    fn test_event_ok_carries_event() {
        let (status, Json(body)) = event_response(Ok(run()), "Event added successfully");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.event, Some(run()));
        assert_eq!(body.message.as_deref(), Some("Event added successfully"));
    }

    #[test]
    fn test_delete_statuses() {
        assert_eq!(delete_response(Ok(())).0, StatusCode::OK);
        let (status, Json(body)) = delete_response(Err(EventServiceError::NotFound(EventId(2))));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, DeleteLogResponse::not_found());
        assert_eq!(
            delete_response(Err(anyhow::anyhow!("locked").into())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
