//! Sidebar with collapsible navigation groups

use crate::shared::icons::icon;
use crate::urls::{group_of, is_active, NavGroup, NAV_GROUPS};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    // the group of the landing page starts expanded
    let expanded_groups = RwSignal::new(
        group_of(&pathname.get_untracked())
            .map(|id| vec![id])
            .unwrap_or_default(),
    );

    view! {
        <nav class="app-sidebar__content">
            {NAV_GROUPS
                .iter()
                .map(|group| view! { <SidebarGroup group=*group pathname=pathname expanded_groups=expanded_groups /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn SidebarGroup(
    group: NavGroup,
    #[prop(into)] pathname: Signal<String>,
    expanded_groups: RwSignal<Vec<&'static str>>,
) -> impl IntoView {
    // a group with a single page is a plain link
    if let [only] = group.items {
        return view! {
            <a
                href=only.path
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || pathname.with(|p| is_active(p, only.path))
                style:padding-left="12px"
            >
                <div class="app-sidebar__item-content">
                    {icon(group.icon)}
                    <span>{group.label}</span>
                </div>
            </a>
        }
        .into_any();
    }

    let is_expanded = move || expanded_groups.with(|ids| ids.contains(&group.id));
    let toggle = move |_| {
        expanded_groups.update(|ids| {
            if let Some(pos) = ids.iter().position(|id| *id == group.id) {
                ids.remove(pos);
            } else {
                ids.push(group.id);
            }
        })
    };

    view! {
        <div>
            <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                <div class="app-sidebar__item-content">
                    {icon(group.icon)}
                    <span>{group.label}</span>
                </div>
                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {group
                        .items
                        .iter()
                        .map(|item| {
                            let path = item.path;
                            view! {
                                <a
                                    href=path
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || pathname.with(|p| is_active(p, path))
                                    style:padding-left="10px"
                                >
                                    <div class="app-sidebar__item-content">
                                        <span>{item.label}</span>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
