mod view_model;

pub use view_model::EventEditViewModel;

use crate::domain::a001_event::state::use_event_store;
use crate::domain::a001_event::ui::fields::EventFormFields;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifier;
use contracts::domain::a001_event::aggregate::Event;
use leptos::ev;
use leptos::prelude::*;

/// Edit modal for one entry. Cancel closes without touching the store;
/// a failed save keeps the modal open.
#[component]
pub fn EditEventModal(event: Event, on_close: Callback<()>) -> impl IntoView {
    let store = use_event_store();
    let notifier = use_notifier();
    let vm = EventEditViewModel::new(&event);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(store, notifier, on_close);
    };

    view! {
        <Modal title="Edit entry".to_string() on_close=on_close id="edit-modal">
            <form id="edit-log-form" on:submit=on_submit>
                <input type="hidden" id="edit-log-id" prop:value=vm.id.to_string() />
                <EventFormFields form=vm.form prefix="edit-" />
                <div class="details-actions">
                    <button type="submit" class="button button--primary" disabled=move || vm.saving.get()>
                        {icon("edit")}
                        {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
