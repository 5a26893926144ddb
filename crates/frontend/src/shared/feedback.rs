//! Reporting outcomes of API calls to the user.
//!
//! Contexts can't be looked up after an `.await`, so components grab a
//! [`Feedback`] handle while rendering and move it into their futures.

use crate::modals::network_error::NetworkErrorProps;
use crate::shared::api_utils::ApiError;
use crate::shared::modal::{use_modal, Modal, ModalService};
use crate::shared::snackbar::{use_snackbar, SnackbarService};

#[derive(Clone, Copy)]
pub struct Feedback {
    modal: ModalService,
    snackbar: SnackbarService,
}

impl Feedback {
    pub fn success(&self, title: impl Into<String>) {
        self.snackbar.success(title);
    }

    /// Network failures open the network error modal, everything else is a snackbar
    pub fn api_error(&self, title: &str, err: &ApiError) {
        log::error!("{}: {}", title, err);
        if err.is_network() {
            self.modal
                .show_modal(Modal::NetworkError(NetworkErrorProps::default()));
        } else {
            self.snackbar.error(title, Some(err.user_message()));
        }
    }

    pub fn modal(&self) -> ModalService {
        self.modal
    }
}

pub fn use_feedback() -> Feedback {
    Feedback {
        modal: use_modal(),
        snackbar: use_snackbar(),
    }
}
