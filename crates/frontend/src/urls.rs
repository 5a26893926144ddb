//! Paths of every routed page and the navigation built from them.

pub const DETECTIONS: &str = "/detections";
pub const PACKS: &str = "/packs";
pub const DATA_MODELS: &str = "/log-analysis/data-models";
pub const ALERTS: &str = "/log-analysis/alerts";
pub const CUSTOM_LOGS: &str = "/log-analysis/custom-logs";
pub const LOG_SOURCES: &str = "/integrations/log-sources";
pub const CLOUD_ACCOUNTS: &str = "/integrations/cloud-accounts";
pub const DESTINATIONS: &str = "/integrations/destinations";
pub const RESOURCES: &str = "/cloud-security/resources";
pub const GLOBAL_MODULES: &str = "/settings/global-python-modules";
pub const USERS: &str = "/settings/users";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: &'static [NavItem],
}

pub const NAV_GROUPS: &[NavGroup] = &[
    NavGroup {
        id: "detections",
        label: "Detections",
        icon: "detections",
        items: &[
            NavItem {
                path: DETECTIONS,
                label: "Detections",
            },
            NavItem {
                path: PACKS,
                label: "Packs",
            },
        ],
    },
    NavGroup {
        id: "log-analysis",
        label: "Log Analysis",
        icon: "log-analysis",
        items: &[
            NavItem {
                path: ALERTS,
                label: "Alerts",
            },
            NavItem {
                path: DATA_MODELS,
                label: "Data Models",
            },
            NavItem {
                path: CUSTOM_LOGS,
                label: "Custom Schemas",
            },
        ],
    },
    NavGroup {
        id: "cloud-security",
        label: "Cloud Security",
        icon: "cloud",
        items: &[NavItem {
            path: RESOURCES,
            label: "Resources",
        }],
    },
    NavGroup {
        id: "integrations",
        label: "Integrations",
        icon: "integrations",
        items: &[
            NavItem {
                path: LOG_SOURCES,
                label: "Log Sources",
            },
            NavItem {
                path: CLOUD_ACCOUNTS,
                label: "Cloud Accounts",
            },
            NavItem {
                path: DESTINATIONS,
                label: "Destinations",
            },
        ],
    },
    NavGroup {
        id: "settings",
        label: "Settings",
        icon: "settings",
        items: &[
            NavItem {
                path: GLOBAL_MODULES,
                label: "Global Modules",
            },
            NavItem {
                path: USERS,
                label: "Users",
            },
        ],
    },
];

/// True when `pathname` is `path` or one of its sub-pages
pub fn is_active(pathname: &str, path: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    pathname == path
        || pathname
            .strip_prefix(path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Group holding the page at `pathname`
pub fn group_of(pathname: &str) -> Option<&'static str> {
    NAV_GROUPS
        .iter()
        .find(|group| group.items.iter().any(|item| is_active(pathname, item.path)))
        .map(|group| group.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_paths_are_unique() {
        let paths: Vec<&str> = NAV_GROUPS
            .iter()
            .flat_map(|group| group.items.iter().map(|item| item.path))
            .collect();
        let unique: HashSet<&str> = paths.iter().copied().collect();
        assert_eq!(paths.len(), unique.len());
        assert!(paths.iter().all(|path| path.starts_with('/')));
    }

    #[test]
    fn test_is_active() {
        assert!(is_active("/detections", DETECTIONS));
        assert!(is_active("/detections/", DETECTIONS));
        assert!(is_active("/detections/AWS.Rule/edit", DETECTIONS));
        assert!(!is_active("/detections-archive", DETECTIONS));
        assert!(!is_active("/log-analysis/alerts", DATA_MODELS));
    }

    #[test]
    fn test_group_of() {
        assert_eq!(group_of("/integrations/destinations"), Some("integrations"));
        assert_eq!(group_of("/packs"), Some("detections"));
        assert_eq!(group_of("/cloud-security/resources"), Some("cloud-security"));
        assert_eq!(group_of("/unknown"), None);
    }
}
