//! Transient notifications stacked in a corner of the screen.

use crate::shared::config::{SNACKBAR_LIFETIME_MS, SNACKBAR_MAX_VISIBLE};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarVariant {
    Success,
    Error,
    Info,
}

impl SnackbarVariant {
    fn class(&self) -> &'static str {
        match self {
            SnackbarVariant::Success => "snackbar snackbar--success",
            SnackbarVariant::Error => "snackbar snackbar--error",
            SnackbarVariant::Info => "snackbar snackbar--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snackbar {
    pub id: u64,
    pub variant: SnackbarVariant,
    pub title: String,
    pub description: Option<String>,
}

/// Bounded queue of visible snackbars, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct SnackbarQueue {
    items: Vec<Snackbar>,
    next_id: u64,
    limit: usize,
}

impl SnackbarQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    pub fn push(
        &mut self,
        variant: SnackbarVariant,
        title: String,
        description: Option<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Snackbar {
            id,
            variant,
            title,
            description,
        });
        if self.items.len() > self.limit {
            let overflow = self.items.len() - self.limit;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|s| s.id != id);
    }

    pub fn items(&self) -> &[Snackbar] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct SnackbarService {
    queue: RwSignal<SnackbarQueue>,
}

impl SnackbarService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(SnackbarQueue::new(SNACKBAR_MAX_VISIBLE)),
        }
    }

    pub fn push_snackbar(
        &self,
        variant: SnackbarVariant,
        title: impl Into<String>,
        description: Option<String>,
    ) {
        let title = title.into();
        let mut id = 0;
        self.queue
            .update(|q| id = q.push(variant, title.clone(), description));
        log::debug!("snackbar #{}: {}", id, title);

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(SNACKBAR_LIFETIME_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push_snackbar(SnackbarVariant::Success, title, None);
    }

    pub fn error(&self, title: impl Into<String>, description: Option<String>) {
        self.push_snackbar(SnackbarVariant::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_snackbar() -> SnackbarService {
    expect_context::<SnackbarService>()
}

/// Renders the snackbar stack. Mounted once at the application root.
#[component]
pub fn SnackbarHost() -> impl IntoView {
    let svc = use_snackbar();

    view! {
        <div class="snackbar-stack" role="status" aria-live="polite">
            <For
                each=move || svc.queue.with(|q| q.items().to_vec())
                key=|snackbar| snackbar.id
                children=move |snackbar| {
                    let id = snackbar.id;
                    view! {
                        <div class=snackbar.variant.class() on:click=move |_| svc.dismiss(id)>
                            <div class="snackbar__title">{snackbar.title}</div>
                            {snackbar.description.map(|d| view! {
                                <div class="snackbar__description">{d}</div>
                            })}
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
    fn test_queue_drops_oldest_over_limit() {
        let mut queue = SnackbarQueue::new(2);
        let first = queue.push(SnackbarVariant::Info, "one".into(), None);
        queue.push(SnackbarVariant::Info, "two".into(), None);
        queue.push(SnackbarVariant::Error, "three".into(), Some("details".into()));

        let titles: Vec<_> = queue.items().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "three"]);
        assert!(queue.items().iter().all(|s| s.id != first));
    }

    #[test]
    fn test_dismiss_removes_only_that_snackbar() {
        let mut queue = SnackbarQueue::new(4);
        let a = queue.push(SnackbarVariant::Success, "a".into(), None);
        let b = queue.push(SnackbarVariant::Success, "b".into(), None);
        queue.dismiss(a);
        queue.dismiss(999);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
    }
}
