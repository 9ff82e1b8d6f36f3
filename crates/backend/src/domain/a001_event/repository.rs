use chrono::Utc;
use contracts::domain::a001_event::aggregate::{Event, EventDto, EventId};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(m: Model) -> Self {
        Event {
            id: EventId(m.id),
            title: m.title,
            date: m.date,
            time: m.time,
            notes: m.notes,
        }
    }
}

/// All events in insertion order
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Event>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: EventId) -> anyhow::Result<Option<Event>> {
    let result = Entity::find_by_id(id.value()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, dto: &EventDto) -> anyhow::Result<Event> {
    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        title: Set(dto.title.clone()),
        date: Set(dto.date.clone()),
        time: Set(dto.time.clone()),
        notes: Set(dto.notes.clone()),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

/// Returns `None` when no row has the event's id.
pub async fn update(db: &DatabaseConnection, event: &Event) -> anyhow::Result<Option<Event>> {
    let Some(existing) = Entity::find_by_id(event.id.value()).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    active.title = Set(event.title.clone());
    active.date = Set(event.date.clone());
    active.time = Set(event.time.clone());
    active.notes = Set(event.notes.clone());
    active.updated_at = Set(Some(Utc::now()));
    let model = active.update(db).await?;
    Ok(Some(model.into()))
}

pub async fn delete(db: &DatabaseConnection, id: EventId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
