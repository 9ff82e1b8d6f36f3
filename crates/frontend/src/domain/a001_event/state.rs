use contracts::domain::a001_event::aggregate::{Event, EventId};
use leptos::prelude::*;

/// In-memory list of events, in server order. The rendered list is a
/// projection of this value and nothing is ever read back from the DOM.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventCollection {
    items: Vec<Event>,
}

impl EventCollection {
    pub fn new(items: Vec<Event>) -> Self {
        Self { items }
    }

    pub fn replace_all(&mut self, events: Vec<Event>) {
        self.items = events;
    }

    /// Add at the end; an entry with the same id is replaced instead
    pub fn append(&mut self, event: Event) {
        if !self.replace(event.clone()) {
            self.items.push(event);
        }
    }

    /// Replace the entry with the same id in place
    pub fn replace(&mut self, event: Event) -> bool {
        match self.items.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                *slot = event;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: EventId) -> Option<Event> {
        let index = self.items.iter().position(|e| e.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.items.iter().find(|e| e.id == id)
    }

    pub fn ids(&self) -> Vec<EventId> {
        self.items.iter().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<Event> {
        self.items.clone()
    }
}

/// Reactive store shared through context
#[derive(Clone, Copy)]
pub struct EventStore {
    pub events: RwSignal<EventCollection>,
    /// Set after the first successful load
    pub loaded: RwSignal<bool>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: RwSignal::new(EventCollection::default()),
            loaded: RwSignal::new(false),
        }
    }

    pub fn replace_all(&self, events: Vec<Event>) {
        self.events.update(|c| c.replace_all(events));
        self.loaded.set(true);
    }

    pub fn append(&self, event: Event) {
        self.events.update(|c| c.append(event));
    }

    pub fn replace(&self, event: Event) -> bool {
        self.events
            .try_update(|c| c.replace(event))
            .unwrap_or(false)
    }

    pub fn remove(&self, id: EventId) -> Option<Event> {
        self.events.try_update(|c| c.remove(id)).flatten()
    }

    pub fn get_untracked(&self, id: EventId) -> Option<Event> {
        self.events.with_untracked(|c| c.get(id).cloned())
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_event_store() -> EventStore {
    use_context::<EventStore>().expect("EventStore not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: i64, title: &str) -> Event {
        Event {
            id: EventId(id),
            title: title.to_string(),
            date: Some("2024-01-01".to_string()),
            time: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_replace_all_keeps_server_order() {
        let mut c = EventCollection::new(vec![event(9, "stale")]);
        c.replace_all(vec![event(3, "c"), event(1, "a"), event(2, "b")]);
        assert_eq!(c.ids(), vec![EventId(3), EventId(1), EventId(2)]);
        assert!(c.get(EventId(9)).is_none());
    }

    #[test]
    fn test_append_adds_exactly_one() {
        let mut c = EventCollection::new(vec![event(1, "a")]);
        c.append(event(2, "b"));
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(EventId(2)).map(|e| e.title.as_str()), Some("b"));
    }

    #[test]
    fn test_append_existing_id_does_not_duplicate() {
        let mut c = EventCollection::new(vec![event(1, "a"), event(2, "b")]);
        c.append(event(1, "a2"));
        assert_eq!(c.ids(), vec![EventId(1), EventId(2)]);
        assert_eq!(c.get(EventId(1)).map(|e| e.title.as_str()), Some("a2"));
    }

    #[test]
    fn test_replace_in_place() {
        let mut c = EventCollection::new(vec![event(1, "a"), event(2, "b"), event(3, "c")]);
        assert!(c.replace(event(2, "edited")));
        assert_eq!(c.ids(), vec![EventId(1), EventId(2), EventId(3)]);
        assert_eq!(c.iter().nth(1).map(|e| e.title.as_str()), Some("edited"));
        assert!(!c.replace(event(4, "ghost")));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut c = EventCollection::new(vec![event(1, "a"), event(2, "b")]);
        assert_eq!(c.remove(EventId(1)).map(|e| e.id), Some(EventId(1)));
        assert_eq!(c.remove(EventId(1)), None);
        assert_eq!(c.ids(), vec![EventId(2)]);
        c.remove(EventId(2));
        assert!(c.is_empty());
    }
}
