use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    /// Cognito-style account status, e.g. "CONFIRMED" or "FORCE_CHANGE_PASSWORD"
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// "Given Family", falling back to the email when both names are blank
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.given_name, self.family_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    /// Invited but never signed in; such users get a reinvite instead of a password reset
    pub fn is_pending_invite(&self) -> bool {
        self.status == "FORCE_CHANGE_PASSWORD"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdInput {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageAction {
    Resend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteUserInput {
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub message_action: MessageAction,
}

impl InviteUserInput {
    pub fn resend(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            given_name: user.given_name.clone(),
            family_name: user.family_name.clone(),
            message_action: MessageAction::Resend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileInput {
    pub given_name: String,
    pub family_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user(given: &str, family: &str) -> User {
        User {
            id: "u-1".into(),
            email: "analyst@example.com".into(),
            given_name: given.into(),
            family_name: family.into(),
            status: "CONFIRMED".into(),
            created_at: Utc.with_ymd_and_hms(2020, 10, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(user("Ada", "Lovelace").display_name(), "Ada Lovelace");
        assert_eq!(user("Ada", "").display_name(), "Ada");
        assert_eq!(user("", "").display_name(), "analyst@example.com");
    }

    #[test]
    fn test_reinvite_payload() {
        let payload = serde_json::to_value(InviteUserInput::resend(&user("Ada", "Lovelace"))).unwrap();
        assert_eq!(payload["messageAction"], "RESEND");
        assert_eq!(payload["givenName"], "Ada");
    }

    #[test]
    fn test_pending_invite() {
        let mut invited = user("Ada", "Lovelace");
        invited.status = "FORCE_CHANGE_PASSWORD".into();
        assert!(invited.is_pending_invite());
        assert!(!user("Ada", "Lovelace").is_pending_invite());
    }
}
