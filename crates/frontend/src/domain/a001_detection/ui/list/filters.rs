use contracts::domain::a001_detection::aggregate::{
    DetectionSortField, DetectionType, ListDetectionsInput,
};
use contracts::shared::paging::SortDir;

use crate::shared::sort_options::SortOption;

pub const SORT_OPTIONS: &[SortOption<DetectionSortField>] = &[
    SortOption {
        label: "Most Recent",
        sort_by: DetectionSortField::LastModified,
        sort_dir: SortDir::Descending,
    },
    SortOption {
        label: "Oldest",
        sort_by: DetectionSortField::LastModified,
        sort_dir: SortDir::Ascending,
    },
    SortOption {
        label: "Name (A-Z)",
        sort_by: DetectionSortField::DisplayName,
        sort_dir: SortDir::Ascending,
    },
    SortOption {
        label: "Name (Z-A)",
        sort_by: DetectionSortField::DisplayName,
        sort_dir: SortDir::Descending,
    },
    SortOption {
        label: "Severity (High-Low)",
        sort_by: DetectionSortField::Severity,
        sort_dir: SortDir::Descending,
    },
    SortOption {
        label: "Severity (Low-High)",
        sort_by: DetectionSortField::Severity,
        sort_dir: SortDir::Ascending,
    },
];

pub fn type_code(detection_type: DetectionType) -> &'static str {
    match detection_type {
        DetectionType::Rule => "RULE",
        DetectionType::Policy => "POLICY",
    }
}

/// Filters that narrow the result set; search text counts, sorting does not
pub fn active_filter_count(input: &ListDetectionsInput) -> usize {
    [
        input.name_contains.is_some(),
        !input.analysis_types.is_empty(),
        input.enabled.is_some(),
        !input.severity.is_empty(),
        !input.log_types.is_empty(),
        !input.tags.is_empty(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sort_options::{find_by_label, label_for};
    use crate::shared::url_params::{decode_lenient, query_string};
    use contracts::domain::common::Severity;

    fn input(query: &str) -> ListDetectionsInput {
        decode_lenient(query_string::parse(query))
    }

    #[test]
    fn test_url_decodes_into_filters() {
        let input = input("?analysisTypes[]=POLICY&enabled=false&severity[]=HIGH&severity[]=CRITICAL&page=3");
        assert_eq!(input.analysis_types, vec![DetectionType::Policy]);
        assert_eq!(input.enabled, Some(false));
        assert_eq!(input.severity, vec![Severity::High, Severity::Critical]);
        assert_eq!(input.page, Some(3));
        assert_eq!(active_filter_count(&input), 3);
    }

    #[test]
    fn test_unknown_values_are_dropped() {
        let input = input("?severity[]=SEVERE&nameContains=root&sortBy=color");
        assert!(input.severity.is_empty());
        assert!(input.sort_by.is_none());
        assert_eq!(input.name_contains.as_deref(), Some("root"));
        assert_eq!(active_filter_count(&input), 1);
    }

    #[test]
    fn test_sort_options_round_trip_through_url() {
        let option = find_by_label(SORT_OPTIONS, "Severity (High-Low)").unwrap();
        let query = format!(
            "sortBy={}&sortDir={}",
            serde_json::to_value(option.sort_by).unwrap().as_str().unwrap(),
            serde_json::to_value(option.sort_dir).unwrap().as_str().unwrap()
        );
        assert_eq!(query, "sortBy=severity&sortDir=descending");

        let decoded = input(&query);
        assert_eq!(
            label_for(SORT_OPTIONS, decoded.sort_by, decoded.sort_dir),
            Some("Severity (High-Low)")
        );
    }

    #[test]
    fn test_type_code_matches_wire_format() {
        for t in [DetectionType::Rule, DetectionType::Policy] {
            assert_eq!(serde_json::to_value(t).unwrap(), type_code(t));
        }
    }
}
