use contracts::system::users::{InviteUserInput, UpdateProfileInput, User, UserIdInput};

use crate::shared::api_utils::{get_json, post_json, post_unit, ApiError};

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    get_json("/api/users/list").await
}

pub async fn delete_user(input: &UserIdInput) -> Result<(), ApiError> {
    post_unit("/api/users/delete", input).await
}

pub async fn reset_user_password(input: &UserIdInput) -> Result<(), ApiError> {
    post_unit("/api/users/reset-password", input).await
}

/// Resends the invitation email of a user who never signed in
pub async fn reinvite_user(input: &InviteUserInput) -> Result<(), ApiError> {
    post_unit("/api/users/reinvite", input).await
}

/// Current user's profile
pub async fn fetch_profile() -> Result<User, ApiError> {
    get_json("/api/users/profile").await
}

pub async fn update_profile(input: &UpdateProfileInput) -> Result<User, ApiError> {
    post_json("/api/users/profile", input).await
}
