use contracts::domain::a009_analysis_pack::aggregate::{AnalysisPack, AnalysisPackVersion};
use std::cmp::Ordering;

/// Compares `v1.10.0`-style versions part by part. Parts that are not numbers count as zero.
pub fn compare_sem_ver(a: &str, b: &str) -> Ordering {
    let parts = |v: &str| -> Vec<u64> {
        v.trim()
            .trim_start_matches(['v', 'V'])
            .split('.')
            .map(|part| part.parse().unwrap_or(0))
            .collect()
    };
    let (a, b) = (parts(a), parts(b));
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Versions the pack can move to, newest first
pub fn sorted_versions(pack: &AnalysisPack) -> Vec<AnalysisPackVersion> {
    let mut versions = pack.available_versions.clone();
    if !versions.iter().any(|v| v.id == pack.pack_version.id) {
        versions.push(pack.pack_version.clone());
    }
    versions.sort_by(|a, b| compare_sem_ver(&b.sem_ver, &a.sem_ver));
    versions
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionAction {
    Update,
    Revert,
}

impl VersionAction {
    pub fn label(&self) -> &'static str {
        match self {
            VersionAction::Update => "Update Pack",
            VersionAction::Revert => "Revert Pack",
        }
    }
}

/// What moving from `current` to `selected` does, and whether it is allowed
pub fn version_action(
    enabled: bool,
    current: &AnalysisPackVersion,
    selected: &AnalysisPackVersion,
) -> (VersionAction, bool) {
    let action = match compare_sem_ver(&selected.sem_ver, &current.sem_ver) {
        Ordering::Less => VersionAction::Revert,
        _ => VersionAction::Update,
    };
    (action, enabled && selected.sem_ver != current.sem_ver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn version(id: u32, sem_ver: &str) -> AnalysisPackVersion {
        AnalysisPackVersion {
            id,
            sem_ver: sem_ver.to_string(),
        }
    }

    #[test]
    fn test_compare_sem_ver_is_numeric() {
        assert_eq!(compare_sem_ver("v1.10.0", "v1.9.3"), Ordering::Greater);
        assert_eq!(compare_sem_ver("1.2", "v1.2.0"), Ordering::Equal);
        assert_eq!(compare_sem_ver("v0.9.1", "v1.0.0"), Ordering::Less);
    }

    #[test]
    fn test_sorted_versions_newest_first_and_include_current() {
        let pack: AnalysisPack = serde_json::from_value(json!({
            "id": "core",
            "enabled": true,
            "packVersion": { "id": 1, "semVer": "v1.2.0" },
            "availableVersions": [
                { "id": 2, "semVer": "v1.9.0" },
                { "id": 3, "semVer": "v1.10.0" }
            ],
            "lastModified": "2021-03-01T10:00:00Z"
        }))
        .unwrap();
        let ids: Vec<u32> = sorted_versions(&pack).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_version_action() {
        let current = version(2, "v1.2.0");
        assert_eq!(
            version_action(true, &current, &version(3, "v1.3.0")),
            (VersionAction::Update, true)
        );
        assert_eq!(
            version_action(true, &current, &version(1, "v1.1.0")),
            (VersionAction::Revert, true)
        );
        assert_eq!(
            version_action(true, &current, &current.clone()),
            (VersionAction::Update, false)
        );
        assert_eq!(
            version_action(false, &current, &version(3, "v1.3.0")),
            (VersionAction::Update, false)
        );
    }
}
