//! Transient notifications.
//!
//! Success and error toasts disappear after the configured lifetime; loading
//! toasts stay until they are resolved or dismissed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Loading,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Loading => "toast toast--loading",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    /// Render key; a resolved toast re-renders with its new kind.
    pub fn key(&self) -> (u64, ToastKind) {
        (self.id, self.kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        self.next_id
    }

    /// Turns a toast (usually a loading one) into its outcome.
    pub fn resolve(&mut self, id: u64, kind: ToastKind, message: impl Into<String>) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.kind = kind;
                toast.message = message.into();
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
    lifetime_ms: u32,
}

impl ToastContext {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            lifetime_ms,
        }
    }

    fn schedule_dismiss(&self, id: u64) {
        let queue = self.queue;
        let lifetime_ms = self.lifetime_ms;
        spawn_local(async move {
            TimeoutFuture::new(lifetime_ms).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.queue.try_update(|q| q.push(kind, message)).unwrap_or_default();
        if kind != ToastKind::Loading {
            self.schedule_dismiss(id);
        }
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Error, message)
    }

    pub fn loading(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Loading, message)
    }

    pub fn resolve(&self, id: u64, kind: ToastKind, message: impl Into<String>) {
        let found = self.queue.try_update(|q| q.resolve(id, kind, message)).unwrap_or(false);
        if found && kind != ToastKind::Loading {
            self.schedule_dismiss(id);
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext not provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=Toast::key
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="button button--icon toast__close"
                                title="Dismiss"
                                on:click=move |_| ctx.dismiss(id)
                            >
                                {crate::shared::icons::icon("x")}
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

    #[test]
    fn test_queue_push_resolve_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Loading, "Publishing...");
        let second = queue.push(ToastKind::Error, "Oops");
        assert_ne!(first, second);

        assert!(queue.resolve(first, ToastKind::Success, "Published"));
        let toast = queue.iter().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Published");

        queue.dismiss(first);
        assert_eq!(queue.iter().count(), 1);
        assert!(!queue.resolve(first, ToastKind::Error, "late"));
    }

    #[test]
    fn test_resolved_toast_gets_a_new_render_key() {
        use std::collections::HashSet;

        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Loading, "Publishing...");
        let mut keys = HashSet::new();
        keys.insert(queue.iter().next().unwrap().key());

        queue.resolve(id, ToastKind::Success, "Published");
        assert!(keys.insert(queue.iter().next().unwrap().key()));
        assert_eq!(keys.len(), 2);
    }
}
