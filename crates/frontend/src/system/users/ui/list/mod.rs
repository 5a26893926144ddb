use contracts::system::users::User;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

use crate::modals::delete_user::DeleteUserProps;
use crate::modals::reinvite_user::ReinviteUserProps;
use crate::modals::reset_user_password::ResetUserPasswordProps;
use crate::shared::date_utils::format_datetime;
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::{unpaged, ListLoader};
use crate::shared::list_utils::{filter_list, sort_indicator, sort_list, toggle_sort, Searchable, Sortable};
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SETTINGS};
use crate::system::users::api;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UserColumn {
    Name,
    Email,
    CreatedAt,
}

impl Searchable for User {
    fn matches_filter(&self, query: &str) -> bool {
        self.display_name().to_lowercase().contains(query)
            || self.email.to_lowercase().contains(query)
    }
}

impl Sortable for User {
    type Column = UserColumn;

    fn compare_by_column(&self, other: &Self, column: UserColumn) -> Ordering {
        match column {
            UserColumn::Name => self
                .display_name()
                .to_lowercase()
                .cmp(&other.display_name().to_lowercase()),
            UserColumn::Email => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
            UserColumn::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}

pub fn status_label(user: &User) -> &'static str {
    if user.is_pending_invite() {
        "Invite Pending"
    } else {
        "Active"
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let feedback = use_feedback();
    let modal = feedback.modal();
    let list = ListLoader::<User>::new();
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new((UserColumn::Name, true));

    Effect::new(move |_| {
        list.load(feedback, "Failed to load users", async move {
            api::list_users().await.map(unpaged)
        });
    });

    let visible = Memo::new(move |_| {
        let mut users = filter_list(list.items(), &search.get());
        let (column, ascending) = sort.get();
        sort_list(&mut users, column, ascending);
        users
    });

    let header = move |label: &'static str, column: UserColumn| {
        view! {
            <TableHeaderCell>
                <div
                    class="table__sortable-header"
                    on:click=move |_| sort.update(|current| *current = toggle_sort(*current, column))
                >
                    {label}
                    <span class="table__sort-indicator">
                        {move || {
                            let (current, ascending) = sort.get();
                            sort_indicator(current, column, ascending)
                        }}
                    </span>
                </div>
            </TableHeaderCell>
        }
    };

    let reload = Callback::new(move |_| list.reload());
    let items = list.items_signal();
    let loading = list.loading();

    view! {
        <PageFrame page_id="users--list" category=PAGE_CAT_SETTINGS>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge appearance=BadgeAppearance::Tint>{move || items.with(Vec::len)}</Badge>
                </div>
                <div class="page__header-right">
                    <Input value=search placeholder="Search by name or email" />
                </div>
            </div>

            <div class="page__content">
                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {header("Name", UserColumn::Name)}
                                {header("Email", UserColumn::Email)}
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                {header("Invited", UserColumn::CreatedAt)}
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|user| user.id.clone()
                                children=move |user| {
                                    let pending = user.is_pending_invite();
                                    let name = user.display_name();
                                    let email = user.email.clone();
                                    let status = status_label(&user);
                                    let invited = format_datetime(&user.created_at);
                                    let for_access = user.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{name}</TableCell>
                                            <TableCell>{email}</TableCell>
                                            <TableCell>
                                                <Badge
                                                    appearance=BadgeAppearance::Tint
                                                    color={ if pending { BadgeColor::Warning } else { BadgeColor::Success } }
                                                >
                                                    {status}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>{invited}</TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| {
                                                            let user = for_access.clone();
                                                            if pending {
                                                                modal.show_modal(Modal::ReinviteUser(ReinviteUserProps {
                                                                    user,
                                                                    on_reinvited: Some(reload),
                                                                }));
                                                            } else {
                                                                modal.show_modal(Modal::ResetUserPassword(
                                                                    ResetUserPasswordProps { user },
                                                                ));
                                                            }
                                                        }
                                                    >
                                                        {if pending { "Reinvite" } else { "Reset Password" }}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| {
                                                            modal.show_modal(Modal::DeleteUser(DeleteUserProps {
                                                                user: user.clone(),
                                                                on_deleted: Some(reload),
                                                            }))
                                                        }
                                                    >
                                                        "Delete"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || loading.get() && items.with(Vec::is_empty)>
                    <div class="list-placeholder">"Loading users..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">"No users found"</div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user(given: &str, email: &str, status: &str, day: u32) -> User {
        User {
            id: email.to_string(),
            email: email.to_string(),
            given_name: given.to_string(),
            family_name: String::new(),
            status: status.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let users = vec![
            user("Ada", "ada@example.com", "CONFIRMED", 1),
            user("Grace", "hopper@example.com", "CONFIRMED", 2),
        ];
        let found = filter_list(users.clone(), "hop");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].given_name, "Grace");
        assert_eq!(filter_list(users, "ADA").len(), 1);
    }

    #[test]
    fn test_sort_by_created_at_descending() {
        let mut users = vec![
            user("Ada", "a@example.com", "CONFIRMED", 3),
            user("Bob", "b@example.com", "CONFIRMED", 5),
        ];
        sort_list(&mut users, UserColumn::CreatedAt, false);
        assert_eq!(users[0].given_name, "Bob");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(&user("A", "a@x.io", "FORCE_CHANGE_PASSWORD", 1)), "Invite Pending");
        assert_eq!(status_label(&user("A", "a@x.io", "CONFIRMED", 1)), "Active");
    }
}
