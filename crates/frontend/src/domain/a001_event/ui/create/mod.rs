use crate::domain::a001_event::commands;
use crate::domain::a001_event::form::EventForm;
use crate::domain::a001_event::state::use_event_store;
use crate::domain::a001_event::ui::fields::EventFormFields;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifier;
use leptos::ev;
use leptos::prelude::*;

/// New-entry form. A successful submit appends the entry and resets the form.
#[component]
pub fn EventCreateForm() -> impl IntoView {
    let store = use_event_store();
    let notifier = use_notifier();
    let form = RwSignal::new(EventForm::today());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let dto = form.with_untracked(|f| f.to_dto());
        saving.set(true);
        notifier.spawn_guarded("Adding entry", async move {
            let result = commands::create_event(store, dto).await;
            saving.set(false);
            let event = result?;
            form.set(EventForm::today());
            notifier.info(format!("Added \"{}\"", event.title));
            Ok(())
        });
    };

    view! {
        <form id="log-form" class="event-create" on:submit=on_submit>
            <EventFormFields form=form prefix="new-" />
            <div class="details-actions">
                <button type="submit" class="button button--primary" disabled=move || saving.get()>
                    {icon("plus")}
                    {move || if saving.get() { "Adding..." } else { "Add entry" }}
                </button>
            </div>
        </form>
    }
}
