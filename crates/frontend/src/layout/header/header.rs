use crate::domain::a001_event::ui::create::EventCreateForm;
use crate::shared::dropdown::Dropdown;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header app-header">
            <div class="header__content">
                <span class="header__title">"Journal"</span>
            </div>
            <div class="header__actions">
                <Dropdown label="New entry".to_string()>
                    <EventCreateForm />
                </Dropdown>
            </div>
        </header>
    }
}
