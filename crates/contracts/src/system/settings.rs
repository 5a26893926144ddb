use serde::{Deserialize, Serialize};

/// Organisation-wide console settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub error_reporting_consent: Option<bool>,
    #[serde(default)]
    pub analytics_consent: Option<bool>,
}

impl GeneralSettings {
    /// Consent has never been recorded, neither accepted nor declined
    pub fn needs_consent(&self) -> bool {
        self.analytics_consent.is_none() || self.error_reporting_consent.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsentInput {
    pub error_reporting_consent: bool,
    pub analytics_consent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(error_reporting: Option<bool>, analytics: Option<bool>) -> GeneralSettings {
        GeneralSettings {
            error_reporting_consent: error_reporting,
            analytics_consent: analytics,
            ..Default::default()
        }
    }

    #[test]
    fn test_needs_consent_when_either_flag_is_unset() {
        assert!(settings(None, None).needs_consent());
        assert!(settings(Some(true), None).needs_consent());
        assert!(settings(None, Some(false)).needs_consent());
        assert!(!settings(Some(false), Some(false)).needs_consent());
        assert!(!settings(Some(true), Some(true)).needs_consent());
    }

    #[test]
    fn test_missing_consent_fields_decode_as_unset() {
        let parsed: GeneralSettings =
            serde_json::from_str(r#"{"displayName":"Acme","analyticsConsent":true}"#).unwrap();
        assert_eq!(parsed.analytics_consent, Some(true));
        assert!(parsed.needs_consent());
    }
}
