use super::repository;
use contracts::domain::a001_event::aggregate::{Event, EventDto, EventId};
use sea_orm::DatabaseConnection;

#[derive(Debug, thiserror::Error)]
pub enum EventServiceError {
    #[error("event {0} not found")]
    NotFound(EventId),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, EventServiceError>;

/// All events in insertion order
pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<Event>> {
    Ok(repository::list_all(db).await?)
}

/// Store a new event; blank date/time are stored as NULL
pub async fn create(db: &DatabaseConnection, dto: EventDto) -> ServiceResult<Event> {
    let dto = dto.normalized();
    let event = repository::insert(db, &dto).await?;
    tracing::info!(id = %event.id, "event created");
    Ok(event)
}

/// Replace every field of an existing event
pub async fn update(db: &DatabaseConnection, event: Event) -> ServiceResult<Event> {
    let id = event.id;
    let normalized = Event::from_dto(id, event.to_dto().normalized());
    match repository::update(db, &normalized).await? {
        Some(updated) => {
            tracing::info!(%id, "event updated");
            Ok(updated)
        }
        None => Err(EventServiceError::NotFound(id)),
    }
}

pub async fn delete(db: &DatabaseConnection, id: EventId) -> ServiceResult<()> {
    if repository::delete(db, id).await? {
        tracing::info!(%id, "event deleted");
        Ok(())
    } else {
        tracing::warn!(%id, "delete requested for missing event");
        Err(EventServiceError::NotFound(id))
    }
}
