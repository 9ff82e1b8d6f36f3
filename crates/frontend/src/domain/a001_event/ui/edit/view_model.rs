use crate::domain::a001_event::commands;
use crate::domain::a001_event::form::EventForm;
use crate::domain::a001_event::state::EventStore;
use crate::shared::notifications::Notifier;
use contracts::domain::a001_event::aggregate::{Event, EventId};
use leptos::prelude::*;

/// ViewModel of the edit modal. The form is filled from the stored record;
/// nothing touches the store until the server accepted the update.
#[derive(Clone, Copy)]
pub struct EventEditViewModel {
    pub id: EventId,
    pub form: RwSignal<EventForm>,
    pub saving: RwSignal<bool>,
}

impl EventEditViewModel {
    pub fn new(event: &Event) -> Self {
        Self {
            id: event.id,
            form: RwSignal::new(EventForm::from_event(event)),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, store: EventStore, notifier: Notifier, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let edited = self.form.with_untracked(|f| f.to_event(self.id));
        let saving = self.saving;
        saving.set(true);
        notifier.spawn_guarded("Saving entry", async move {
            let result = commands::update_event(store, edited).await;
            saving.set(false);
            result?;
            on_saved.run(());
            Ok(())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> Event {
        Event {
            id: EventId(4),
            title: "Morning run".to_string(),
            date: Some("2024-03-01".to_string()),
            time: None,
            notes: "5 km".to_string(),
        }
    }

    #[test]
    fn test_editing_then_cancel_leaves_store_untouched() {
        let owner = Owner::new();
        owner.set();
        let original = run();
        let store = EventStore::new();
        store.replace_all(vec![original.clone()]);

        let vm = EventEditViewModel::new(&original);
        assert_eq!(vm.form.get_untracked(), EventForm::from_event(&original));
        vm.form.update(|f| {
            f.title = "changed".to_string();
            f.time = "18:00".to_string();
        });
        assert!(!vm.saving.get_untracked());

        assert_eq!(store.get_untracked(original.id), Some(original));
    }
}
