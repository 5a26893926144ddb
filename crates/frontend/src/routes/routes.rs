use crate::domain::a001_detection::ui::list::DetectionsListPage;
use crate::domain::a002_data_model::ui::list::DataModelsListPage;
use crate::domain::a003_alert::ui::list::AlertsListPage;
use crate::domain::a004_destination::ui::list::DestinationsListPage;
use crate::domain::a005_log_source::ui::list::LogSourcesListPage;
use crate::domain::a006_compliance_source::ui::list::ComplianceSourcesListPage;
use crate::domain::a007_custom_log::ui::list::CustomLogsListPage;
use crate::domain::a008_global_module::ui::list::GlobalModulesListPage;
use crate::domain::a009_analysis_pack::ui::list::AnalysisPacksListPage;
use crate::domain::a010_resource::ui::list::ResourcesListPage;
use crate::layout::Shell;
use crate::shared::url_params::{AppUrlParams, RouterLocation};
use crate::system::users::ui::list::UsersListPage;
use crate::urls;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page not found"</h1>
            <a href=urls::DETECTIONS>"Back to detections"</a>
        </div>
    }
}

/// Routed part of the application. Must be rendered inside `<Router>`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    // list pages keep their filters in the query string of the current route
    provide_context(AppUrlParams::new(RouterLocation::new()));

    view! {
        <Shell>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=urls::DETECTIONS /> } />
                <Route path=path!("/detections") view=DetectionsListPage />
                <Route path=path!("/packs") view=AnalysisPacksListPage />
                <Route path=path!("/log-analysis/data-models") view=DataModelsListPage />
                <Route path=path!("/log-analysis/alerts") view=AlertsListPage />
                <Route path=path!("/log-analysis/custom-logs") view=CustomLogsListPage />
                <Route path=path!("/cloud-security/resources") view=ResourcesListPage />
                <Route path=path!("/integrations/log-sources") view=LogSourcesListPage />
                <Route path=path!("/integrations/cloud-accounts") view=ComplianceSourcesListPage />
                <Route path=path!("/integrations/destinations") view=DestinationsListPage />
                <Route path=path!("/settings/global-python-modules") view=GlobalModulesListPage />
                <Route path=path!("/settings/users") view=UsersListPage />
            </Routes>
        </Shell>
    }
}
