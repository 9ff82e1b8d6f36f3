use crate::domain::a001_event::commands;
use crate::domain::a001_event::state::use_event_store;
use crate::domain::a001_event::ui::edit::EditEventModal;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifier;
use contracts::domain::a001_event::aggregate::{Event, EventId};
use leptos::prelude::*;

/// One rendered entry. All fields are inserted as text, never as markup.
#[component]
pub fn EventCard(
    event: Event,
    on_edit: Callback<EventId>,
    on_delete: Callback<EventId>,
) -> impl IntoView {
    let id = event.id;
    let when = event.when();

    view! {
        <div class="log" id=id.dom_id()>
            <div class="log-header">
                <div class="log-details">
                    <p class="log-when">{when}</p>
                    <h2>{event.title}</h2>
                </div>
                <div class="log-actions">
                    <button
                        class="action-button"
                        aria-label="Edit entry"
                        on:click=move |_| on_edit.run(id)
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="action-button"
                        aria-label="Delete entry"
                        on:click=move |_| on_delete.run(id)
                    >
                        {icon("delete")}
                    </button>
                </div>
            </div>
            <p class="notes-container">{event.notes}</p>
        </div>
    }
}

#[component]
pub fn EventList() -> impl IntoView {
    let store = use_event_store();
    let notifier = use_notifier();
    let (editing, set_editing) = signal::<Option<EventId>>(None);

    let fetch = move || notifier.spawn_guarded("Loading entries", commands::load_events(store));

    let handle_edit = Callback::new(move |id: EventId| {
        if store.get_untracked(id).is_some() {
            set_editing.set(Some(id));
        }
    });

    let handle_delete = Callback::new(move |id: EventId| {
        if !commands::confirm_delete() {
            return;
        }
        notifier.spawn_guarded("Deleting entry", commands::delete_event(store, id));
    });

    let close_editor = Callback::new(move |_: ()| set_editing.set(None));

    fetch();

    view! {
        <section class="journal">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Entries"}</h1>
                    <span class="header__count">
                        {move || store.events.with(|c| c.len())}
                    </span>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <Show when=move || store.loaded.get() && store.events.with(|c| c.is_empty())>
                <p class="journal__empty">{"No entries yet."}</p>
            </Show>

            <div id="log-container" class="log-container">
                // keyed by the whole record: an edited entry is re-rendered, the rest are kept
                <For
                    each=move || store.events.with(|c| c.to_vec())
                    key=|event| event.clone()
                    children=move |event: Event| {
                        view! { <EventCard event=event on_edit=handle_edit on_delete=handle_delete /> }
                    }
                />
            </div>

            {move || {
                editing
                    .get()
                    .and_then(|id| store.get_untracked(id))
                    .map(|event| view! { <EditEventModal event=event on_close=close_editor /> })
            }}
        </section>
    }
}
