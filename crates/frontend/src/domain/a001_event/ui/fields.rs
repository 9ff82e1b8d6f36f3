use crate::domain::a001_event::form::EventForm;
use leptos::prelude::*;

/// Title, date, time and notes inputs bound to one form signal.
/// `prefix` keeps element ids unique when the create and edit forms coexist.
#[component]
pub fn EventFormFields(form: RwSignal<EventForm>, prefix: &'static str) -> impl IntoView {
    let id = move |name: &str| format!("{prefix}{name}");

    view! {
        <div class="details-form">
            <div class="form-group">
                <label for=id("title")>{"Title"}</label>
                <input
                    type="text"
                    id=id("title")
                    name="title"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    placeholder="What happened?"
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for=id("date")>{"Date"}</label>
                    <input
                        type="date"
                        id=id("date")
                        name="date"
                        prop:value=move || form.with(|f| f.date.clone())
                        on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for=id("time")>{"Time"}</label>
                    <input
                        type="time"
                        id=id("time")
                        name="time"
                        prop:value=move || form.with(|f| f.time.clone())
                        on:input=move |ev| form.update(|f| f.time = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-group">
                <label for=id("notes")>{"Notes"}</label>
                <textarea
                    id=id("notes")
                    name="notes"
                    rows="4"
                    prop:value=move || form.with(|f| f.notes.clone())
                    on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                />
            </div>
        </div>
    }
}
