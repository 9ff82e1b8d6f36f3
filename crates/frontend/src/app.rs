use crate::domain::a001_event::state::EventStore;
use crate::domain::a001_event::ui::list::EventList;
use crate::layout::Header;
use crate::shared::notifications::{Notifier, Toasts};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The one message channel for every action
    provide_context(Notifier::new());

    // In-memory events; the list on screen is rendered from it
    provide_context(EventStore::new());

    view! {
        <div class="app">
            <Header />
            <main class="app__main">
                <EventList />
            </main>
            <Toasts />
        </div>
    }
}
