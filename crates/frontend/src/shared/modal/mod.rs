//! Application-wide modal dispatcher.
//!
//! At most one modal is open at a time. Pages and components open one by
//! dispatching `ModalAction::Show` with a fully typed [`Modal`]; the
//! [`host::ModalHost`] mounted at the root renders it.

pub mod host;
pub mod kinds;

pub use host::ModalHost;
pub use kinds::{Modal, ModalKind};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub modal: Option<Modal>,
    pub is_visible: bool,
}

impl ModalState {
    pub fn kind(&self) -> Option<ModalKind> {
        self.modal.as_ref().map(Modal::kind)
    }

    /// Applies an action. Hiding keeps the last modal and its props so the
    /// closing transition can still render them.
    pub fn reduce(self, action: ModalAction) -> ModalState {
        match action {
            ModalAction::Show(modal) => ModalState {
                modal: Some(modal),
                is_visible: true,
            },
            ModalAction::Hide => ModalState {
                is_visible: false,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone)]
pub enum ModalAction {
    Show(Modal),
    Hide,
}

#[derive(Clone, Copy)]
pub struct ModalService {
    state: RwSignal<ModalState>,
    /// Bumped on every `Show`, so a deferred close only hides the modal it was requested for
    shown: StoredValue<u64>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalState::default()),
            shown: StoredValue::new(0),
        }
    }

    pub fn dispatch(&self, action: ModalAction) {
        match &action {
            ModalAction::Show(modal) => {
                log::debug!("modal: show {:?}", modal.kind());
                self.shown.update_value(|n| *n += 1);
            }
            ModalAction::Hide => log::debug!("modal: hide"),
        }
        self.state
            .update(|state| *state = std::mem::take(state).reduce(action));
    }

    pub fn show_modal(&self, modal: Modal) {
        self.dispatch(ModalAction::Show(modal));
    }

    pub fn hide_modal(&self) {
        self.dispatch(ModalAction::Hide);
    }

    /// Token of the modal shown right now
    pub fn current(&self) -> u64 {
        self.shown.get_value()
    }

    /// Hides the modal only if no other one was shown since `token` was taken
    pub fn hide_if_current(&self, token: u64) {
        if self.current() == token {
            self.hide_modal();
        }
    }

    /// Hides the modal on the next tick.
    ///
    /// Close buttons and confirm handlers run inside a DOM event of the modal
    /// itself; unmounting it during that dispatch drops the handler's closure.
    pub fn close_soon(&self) {
        let svc = *self;
        let token = self.current();
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.hide_if_current(token);
        });
    }

    /// Tracked read of the current state
    pub fn state(&self) -> ModalState {
        self.state.get()
    }

    pub fn is_visible(&self) -> bool {
        self.state.with(|s| s.is_visible)
    }

    /// Callback that closes the modal on the next tick, for `on_close` props
    pub fn close_callback(&self) -> Callback<()> {
        let svc = *self;
        Callback::new(move |_| svc.close_soon())
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    expect_context::<ModalService>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modals::analytics_consent::AnalyticsConsentProps;
    use crate::modals::generic::GenericProps;
    use crate::modals::network_error::NetworkErrorProps;

    fn generic(title: &str) -> Modal {
        Modal::Generic(GenericProps {
            title: title.to_string(),
            body: "body".to_string(),
            show_close_button: true,
        })
    }

    fn title_of(state: &ModalState) -> Option<String> {
        match &state.modal {
            Some(Modal::Generic(props)) => Some(props.title.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = ModalState::default();
        assert!(state.modal.is_none());
        assert!(!state.is_visible);
    }

    #[test]
    fn test_show_sets_modal_and_visibility() {
        let state = ModalState::default().reduce(ModalAction::Show(generic("Health")));
        assert_eq!(state.kind(), Some(ModalKind::Generic));
        assert_eq!(title_of(&state).as_deref(), Some("Health"));
        assert!(state.is_visible);
    }

    #[test]
    fn test_hide_keeps_last_modal_and_props() {
        let state = ModalState::default()
            .reduce(ModalAction::Show(generic("Health")))
            .reduce(ModalAction::Hide);
        assert!(!state.is_visible);
        assert_eq!(state.kind(), Some(ModalKind::Generic));
        assert_eq!(title_of(&state).as_deref(), Some("Health"));
    }

    #[test]
    fn test_show_replaces_previous_modal() {
        let state = ModalState::default()
            .reduce(ModalAction::Show(generic("first")))
            .reduce(ModalAction::Show(Modal::NetworkError(NetworkErrorProps::default())));
        assert_eq!(state.kind(), Some(ModalKind::NetworkError));
        assert!(state.is_visible);
    }

    #[test]
    fn test_hide_on_empty_state_is_noop() {
        let state = ModalState::default().reduce(ModalAction::Hide);
        assert!(state.modal.is_none());
        assert!(!state.is_visible);
    }

    #[test]
    fn test_service_show_and_hide_through_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let svc = ModalService::new();
            assert!(!svc.is_visible());
            svc.show_modal(generic("Health"));
            assert!(svc.is_visible());
            svc.dispatch(ModalAction::Hide);
            let state = svc.state();
            assert!(!state.is_visible);
            assert_eq!(title_of(&state).as_deref(), Some("Health"));
        });
    }

    #[test]
    fn test_late_close_leaves_newer_modal_open() {
        let owner = Owner::new();
        owner.with(|| {
            let svc = ModalService::new();
            svc.show_modal(generic("first"));
            let token = svc.current();
            svc.show_modal(generic("second"));
            svc.hide_if_current(token);
            assert!(svc.is_visible());
            assert_eq!(title_of(&svc.state()).as_deref(), Some("second"));

            svc.hide_if_current(svc.current());
            assert!(!svc.is_visible());
        });
    }

    #[test]
    fn test_only_consent_prompt_ignores_escape() {
        assert!(!Modal::AnalyticsConsent(AnalyticsConsentProps::default()).dismissible());
        assert!(generic("Health").dismissible());
        assert!(Modal::NetworkError(NetworkErrorProps::default()).dismissible());
    }
}
