use contracts::domain::a001_event::aggregate::{Event, EventDto, EventId};
use contracts::domain::a001_event::response::{EventListResponse, EventResponse};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::{api_url, ApiError};

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

async fn failure(response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    ApiError::from_status(response.status(), &body)
}

/// GET /events
pub async fn fetch_events() -> Result<Vec<Event>, ApiError> {
    let response = Request::get(&api_url("/events"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(transport)?;

    if !response.ok() {
        return Err(failure(response).await);
    }

    let body: EventListResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    events_from(body)
}

/// POST /events/add
pub async fn create_event(dto: &EventDto) -> Result<Event, ApiError> {
    let response = Request::post(&api_url("/events/add"))
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(transport)?;

    read_event(response).await
}

/// POST /events/update with the full record
pub async fn update_event(event: &Event) -> Result<Event, ApiError> {
    let response = Request::post(&api_url("/events/update"))
        .header("Accept", "application/json")
        .json(event)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(transport)?;

    read_event(response).await
}

/// DELETE /delete_log/:id; any 2xx is success
pub async fn delete_event(id: EventId) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&format!("/delete_log/{}", id)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(transport)?;

    if !response.ok() {
        return Err(failure(response).await);
    }
    Ok(())
}

async fn read_event(response: Response) -> Result<Event, ApiError> {
    if !response.ok() {
        return Err(failure(response).await);
    }
    let body: EventResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    event_from(body)
}

fn events_from(body: EventListResponse) -> Result<Vec<Event>, ApiError> {
    if body.successful {
        Ok(body.events)
    } else {
        Err(ApiError::rejected(body.message))
    }
}

fn event_from(body: EventResponse) -> Result<Event, ApiError> {
    match body {
        EventResponse {
            successful: true,
            event: Some(event),
            ..
        } => Ok(event),
        EventResponse {
            successful: true,
            event: None,
            ..
        } => Err(ApiError::Decode("response has no event".to_string())),
        EventResponse { message, .. } => Err(ApiError::rejected(message)),
    }
}
