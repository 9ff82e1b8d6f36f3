//! Dropdown menu: a trigger button and a panel that stays mounted while hidden,
//! so a half-filled form inside it survives closing.

use crate::shared::icons::icon;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Document-wide click. Closes only when the click landed outside both
    /// the trigger and the panel; returns whether the state changed.
    pub fn on_document_click(&mut self, inside_trigger: bool, inside_panel: bool) -> bool {
        if self.open && !inside_trigger && !inside_panel {
            self.open = false;
            true
        } else {
            false
        }
    }
}

fn contains(container: Option<web_sys::Element>, target: Option<&web_sys::Node>) -> bool {
    match (container, target) {
        (Some(el), Some(node)) => el.contains(Some(node)),
        _ => false,
    }
}

#[component]
pub fn Dropdown(
    /// Trigger button text
    label: String,
    /// Panel content
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(DropdownState::default());
    let trigger_ref = NodeRef::<html::Button>::new();
    let panel_ref = NodeRef::<html::Div>::new();

    let handle = window_event_listener(ev::click, move |event: ev::MouseEvent| {
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside_trigger = contains(
            trigger_ref.get_untracked().map(Into::into),
            target.as_ref(),
        );
        let inside_panel = contains(panel_ref.get_untracked().map(Into::into), target.as_ref());
        if state.with_untracked(|s| s.is_open()) {
            state.update(|s| {
                s.on_document_click(inside_trigger, inside_panel);
            });
        }
    });
    on_cleanup(move || handle.remove());

    let is_open = move || state.with(|s| s.is_open());

    view! {
        <div class="dropdown">
            <button
                node_ref=trigger_ref
                id="dropdown-btn"
                class="button button--primary dropdown__trigger"
                aria-haspopup="true"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| state.update(|s| s.toggle())
            >
                {icon("plus")}
                <span>{label}</span>
                {move || if is_open() { icon("chevron-up") } else { icon("chevron-down") }}
            </button>
            <div
                node_ref=panel_ref
                id="dropdown-content"
                class="dropdown__panel"
                style:display=move || if is_open() { "block" } else { "none" }
            >
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_click_opens_and_closes() {
        let mut s = DropdownState::default();
        assert!(!s.is_open());
        s.toggle();
        assert!(s.is_open());
        // the same click reaches the document listener from inside the trigger
        assert!(!s.on_document_click(true, false));
        assert!(s.is_open());
        s.toggle();
        assert!(!s.is_open());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut s = DropdownState::default();
        s.toggle();
        assert!(s.on_document_click(false, false));
        assert!(!s.is_open());
    }

    #[test]
    fn test_inside_panel_click_keeps_open() {
        let mut s = DropdownState::default();
        s.toggle();
        assert!(!s.on_document_click(false, true));
        assert!(s.is_open());
    }

    #[test]
    fn test_outside_click_when_closed_is_noop() {
        let mut s = DropdownState::default();
        assert!(!s.on_document_click(false, false));
        assert!(!s.is_open());
        s.toggle();
        s.close();
        assert!(!s.is_open());
    }
}
