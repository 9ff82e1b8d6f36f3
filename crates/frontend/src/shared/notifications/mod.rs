//! The single user-visible message channel.
//!
//! Every network-backed action is spawned through [`Notifier::spawn_guarded`];
//! a failed action ends up here as an error toast, never only in the console.

use crate::shared::api_utils::ApiError;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

/// Info toasts disappear on their own, errors stay until dismissed
const INFO_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Text of the toast for a failed action
pub fn failure_text(action: &str, err: &ApiError) -> String {
    format!("{action} failed: {err}")
}

#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn info(&self, text: impl Into<String>) {
        let id = self
            .queue
            .try_update(|q| q.push(NotificationKind::Info, text))
            .unwrap_or_default();
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(INFO_TIMEOUT_MS).await;
            this.dismiss(id);
        });
    }

    pub fn error(&self, text: impl Into<String>) {
        self.queue.update(|q| {
            q.push(NotificationKind::Error, text);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    /// Messages currently shown, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.queue.with(|q| q.items().to_vec())
    }

    /// Log a failed action and surface it to the user
    pub fn report(&self, action: &str, err: &ApiError) {
        log::error!("{action}: {err:?}");
        self.error(failure_text(action, err));
    }

    /// Run a network-backed action; its error is reported here
    pub fn spawn_guarded<T, F>(&self, action: &'static str, fut: F)
    where
        T: 'static,
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let this = *self;
        spawn_local(async move {
            if let Err(err) = fut.await {
                this.report(action, &err);
            }
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not found in context")
}

#[component]
pub fn Toasts() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notifier.notifications()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div
                            class="toast"
                            class:toast--error=n.kind == NotificationKind::Error
                            class:toast--info=n.kind == NotificationKind::Info
                        >
                            <span class="toast__text">{n.text}</span>
                            <button
                                class="button button--icon toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_event::aggregate::EventId;

    #[test]
    fn test_queue_ids_are_unique() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Error, "a");
        let b = q.push(NotificationKind::Info, "b");
        assert_ne!(a, b);
        q.dismiss(a);
        let c = q.push(NotificationKind::Error, "c");
        assert_ne!(b, c);
        let texts: Vec<&str> = q.items().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut q = NotificationQueue::default();
        q.push(NotificationKind::Info, "kept");
        q.dismiss(99);
        assert_eq!(q.items().len(), 1);
    }

    #[test]
    fn test_failure_text() {
        assert_eq!(
            failure_text("Deleting entry", &ApiError::MissingTarget(EventId(3))),
            "Deleting entry failed: entry 3 is no longer in the list"
        );
    }
}
