//! TopHeader component - application top navigation bar.
//!
//! Holds the sidebar toggle, the application title and the profile button
//! that opens the profile settings of the signed-in user.

use crate::layout::global_context::use_global_context;
use crate::modals::edit_profile_settings::EditProfileSettingsProps;
use crate::shared::feedback::use_feedback;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::text::initials;
use crate::system::users::api;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let feedback = use_feedback();
    let profile = RwSignal::new(None::<User>);
    let opening = RwSignal::new(false);

    spawn_local(async move {
        match api::fetch_profile().await {
            Ok(user) => profile.set(Some(user)),
            Err(err) => log::warn!("profile not loaded: {}", err),
        }
    });

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    // always edit the freshest profile
    let open_profile = move |_| {
        if opening.get_untracked() {
            return;
        }
        opening.set(true);
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(user) => {
                    profile.set(Some(user.clone()));
                    feedback
                        .modal()
                        .show_modal(Modal::EditProfileSettings(EditProfileSettingsProps {
                            user,
                            on_saved: Some(Callback::new(move |saved: User| {
                                profile.set(Some(saved))
                            })),
                        }));
                }
                Err(err) => feedback.api_error("Failed to load your profile", &err),
            }
            opening.set(false);
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("chevrons-left")}
                </button>
                <span class="top-header__title">"Security Console"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__user"
                    title="Profile settings"
                    disabled=move || opening.get()
                    on:click=open_profile
                >
                    {move || match profile.get() {
                        Some(user) => view! {
                            <span class="top-header__avatar">{initials(&user.display_name())}</span>
                            <span>{user.display_name()}</span>
                        }
                        .into_any(),
                        None => icon("user"),
                    }}
                </button>
            </div>
        </div>
    }
}
