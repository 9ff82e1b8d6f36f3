use contracts::domain::a001_event::aggregate::{Event, EventDto, EventId};

/// Raw values of the create/edit form inputs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

impl EventForm {
    /// Empty form with today's date
    pub fn today() -> Self {
        Self {
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Pre-fill from the stored record
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date.clone().unwrap_or_default(),
            time: event.time.clone().unwrap_or_default(),
            notes: event.notes.clone(),
        }
    }

    pub fn to_dto(&self) -> EventDto {
        EventDto {
            title: self.title.clone(),
            date: Some(self.date.clone()),
            time: Some(self.time.clone()),
            notes: self.notes.clone(),
        }
        .normalized()
    }

    pub fn to_event(&self, id: EventId) -> Event {
        Event::from_dto(id, self.to_dto())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_date_and_time_become_none() {
        let form = EventForm {
            title: "Run".into(),
            notes: "5k".into(),
            ..EventForm::default()
        };
        let dto = form.to_dto();
        assert_eq!(dto.date, None);
        assert_eq!(dto.time, None);
        assert_eq!(dto.title, "Run");
    }

    #[test]
    fn test_from_event_round_trips_fields() {
        let event = Event {
            id: EventId(5),
            title: "Run".into(),
            date: Some("2024-01-01".into()),
            time: Some("07:30".into()),
            notes: "<i>easy</i>".into(),
        };
        let form = EventForm::from_event(&event);
        assert_eq!(form.time, "07:30");
        assert_eq!(form.to_event(EventId(5)), event);
    }

    #[test]
    fn test_today_has_iso_date() {
        let form = EventForm::today();
        assert_eq!(form.date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&form.date, "%Y-%m-%d").is_ok());
        assert!(form.title.is_empty());
    }
}
