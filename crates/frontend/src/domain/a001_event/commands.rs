//! User actions on events: network call, then store update.
//!
//! Callers spawn these through `Notifier::spawn_guarded`, which reports any error.
//! The `apply_*` steps take the server's answer and touch only the store.

use contracts::domain::a001_event::aggregate::{Event, EventDto, EventId};

use super::api;
use super::state::EventStore;
use crate::shared::api_utils::ApiError;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this log?";

/// Replace the store with the server's list
pub async fn load_events(store: EventStore) -> Result<(), ApiError> {
    apply_load(store, api::fetch_events().await)
}

/// Create on the server, then append the returned entry
pub async fn create_event(store: EventStore, dto: EventDto) -> Result<Event, ApiError> {
    apply_create(store, api::create_event(&dto).await)
}

/// Send the full record, then swap the stored entry with the server's copy
pub async fn update_event(store: EventStore, event: Event) -> Result<Event, ApiError> {
    ensure_present(store, event.id)?;
    apply_update(store, event.id, api::update_event(&event).await)
}

/// Delete on the server; the entry stays unless the server confirmed
pub async fn delete_event(store: EventStore, id: EventId) -> Result<(), ApiError> {
    ensure_present(store, id)?;
    apply_delete(store, id, api::delete_event(id).await)
}

/// Update and delete target an entry that must still be listed
pub fn ensure_present(store: EventStore, id: EventId) -> Result<(), ApiError> {
    match store.get_untracked(id) {
        Some(_) => Ok(()),
        None => Err(ApiError::MissingTarget(id)),
    }
}

pub fn apply_load(store: EventStore, result: Result<Vec<Event>, ApiError>) -> Result<(), ApiError> {
    let events = result?;
    log::debug!("loaded {} events", events.len());
    store.replace_all(events);
    Ok(())
}

pub fn apply_create(store: EventStore, result: Result<Event, ApiError>) -> Result<Event, ApiError> {
    let event = result?;
    log::debug!("created event {}", event.id);
    store.append(event.clone());
    Ok(event)
}

pub fn apply_update(
    store: EventStore,
    id: EventId,
    result: Result<Event, ApiError>,
) -> Result<Event, ApiError> {
    let updated = result?;
    if !store.replace(updated.clone()) {
        // deleted while the request was in flight
        return Err(ApiError::MissingTarget(id));
    }
    log::debug!("updated event {}", id);
    Ok(updated)
}

pub fn apply_delete(
    store: EventStore,
    id: EventId,
    result: Result<(), ApiError>,
) -> Result<(), ApiError> {
    result?;
    if store.remove(id).is_none() {
        log::warn!("event {} was already gone from the list", id);
    }
    Ok(())
}

/// Blocking browser confirmation before a delete
pub fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(DELETE_PROMPT).ok())
        .unwrap_or(false)
}
