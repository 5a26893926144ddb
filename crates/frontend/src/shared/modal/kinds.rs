use crate::modals::analytics_consent::AnalyticsConsentProps;
use crate::modals::delete_compliance_source::DeleteComplianceSourceProps;
use crate::modals::delete_custom_log::DeleteCustomLogProps;
use crate::modals::delete_data_models::DeleteDataModelsProps;
use crate::modals::delete_destination::DeleteDestinationProps;
use crate::modals::delete_detections::DeleteDetectionsProps;
use crate::modals::delete_global_module::DeleteGlobalModuleProps;
use crate::modals::delete_log_source::DeleteLogSourceProps;
use crate::modals::delete_user::DeleteUserProps;
use crate::modals::edit_profile_settings::EditProfileSettingsProps;
use crate::modals::generic::GenericProps;
use crate::modals::network_error::NetworkErrorProps;
use crate::modals::reinvite_user::ReinviteUserProps;
use crate::modals::reset_user_password::ResetUserPasswordProps;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    DeleteDetections,
    DeleteDataModels,
    DeleteDestination,
    DeleteLogSource,
    DeleteComplianceSource,
    DeleteCustomLog,
    DeleteGlobalModule,
    DeleteUser,
    ResetUserPassword,
    ReinviteUser,
    EditProfileSettings,
    NetworkError,
    AnalyticsConsent,
    Generic,
}

/// A modal together with the props it is rendered with.
///
/// Every kind carries exactly its own props type, so a modal can't be
/// opened with props meant for another one.
#[derive(Clone)]
pub enum Modal {
    DeleteDetections(DeleteDetectionsProps),
    DeleteDataModels(DeleteDataModelsProps),
    DeleteDestination(DeleteDestinationProps),
    DeleteLogSource(DeleteLogSourceProps),
    DeleteComplianceSource(DeleteComplianceSourceProps),
    DeleteCustomLog(DeleteCustomLogProps),
    DeleteGlobalModule(DeleteGlobalModuleProps),
    DeleteUser(DeleteUserProps),
    ResetUserPassword(ResetUserPasswordProps),
    ReinviteUser(ReinviteUserProps),
    EditProfileSettings(EditProfileSettingsProps),
    NetworkError(NetworkErrorProps),
    AnalyticsConsent(AnalyticsConsentProps),
    Generic(GenericProps),
}

impl Modal {
    pub fn kind(&self) -> ModalKind {
        match self {
            Modal::DeleteDetections(_) => ModalKind::DeleteDetections,
            Modal::DeleteDataModels(_) => ModalKind::DeleteDataModels,
            Modal::DeleteDestination(_) => ModalKind::DeleteDestination,
            Modal::DeleteLogSource(_) => ModalKind::DeleteLogSource,
            Modal::DeleteComplianceSource(_) => ModalKind::DeleteComplianceSource,
            Modal::DeleteCustomLog(_) => ModalKind::DeleteCustomLog,
            Modal::DeleteGlobalModule(_) => ModalKind::DeleteGlobalModule,
            Modal::DeleteUser(_) => ModalKind::DeleteUser,
            Modal::ResetUserPassword(_) => ModalKind::ResetUserPassword,
            Modal::ReinviteUser(_) => ModalKind::ReinviteUser,
            Modal::EditProfileSettings(_) => ModalKind::EditProfileSettings,
            Modal::NetworkError(_) => ModalKind::NetworkError,
            Modal::AnalyticsConsent(_) => ModalKind::AnalyticsConsent,
            Modal::Generic(_) => ModalKind::Generic,
        }
    }
}

// Props hold callbacks, so only the kind is printed
impl fmt::Debug for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Modal").field(&self.kind()).finish()
    }
}

impl Modal {
    /// Whether Escape and the overlay may close the modal.
    /// Consent must be answered explicitly.
    pub fn dismissible(&self) -> bool {
        !matches!(self, Modal::AnalyticsConsent(_))
    }
}
