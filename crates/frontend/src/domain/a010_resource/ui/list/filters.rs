use contracts::domain::a006_compliance_source::aggregate::ComplianceSource;
use contracts::domain::a010_resource::aggregate::{ListResourcesInput, ResourceSortField};
use contracts::shared::paging::SortDir;

use crate::shared::sort_options::SortOption;

pub const SORT_OPTIONS: &[SortOption<ResourceSortField>] = &[
    SortOption {
        label: "Most Recent",
        sort_by: ResourceSortField::LastModified,
        sort_dir: SortDir::Descending,
    },
    SortOption {
        label: "Oldest",
        sort_by: ResourceSortField::LastModified,
        sort_dir: SortDir::Ascending,
    },
    SortOption {
        label: "ID (A-Z)",
        sort_by: ResourceSortField::Id,
        sort_dir: SortDir::Ascending,
    },
    SortOption {
        label: "ID (Z-A)",
        sort_by: ResourceSortField::Id,
        sort_dir: SortDir::Descending,
    },
    SortOption {
        label: "Type (A-Z)",
        sort_by: ResourceSortField::Type,
        sort_dir: SortDir::Ascending,
    },
    SortOption {
        label: "Type (Z-A)",
        sort_by: ResourceSortField::Type,
        sort_dir: SortDir::Descending,
    },
    SortOption {
        label: "Status",
        sort_by: ResourceSortField::ComplianceStatus,
        sort_dir: SortDir::Ascending,
    },
];

pub fn active_filter_count(input: &ListResourcesInput) -> usize {
    [
        input.id_contains.is_some(),
        !input.types.is_empty(),
        input.integration_id.is_some(),
        input.compliance_status.is_some(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

/// Label of the account a resource came from, or its raw id when the account is gone
pub fn source_label(sources: &[ComplianceSource], integration_id: &str) -> String {
    sources
        .iter()
        .find(|s| s.integration_id == integration_id)
        .map(|s| s.integration_label.clone())
        .unwrap_or_else(|| integration_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sort_options::label_for;
    use crate::shared::url_params::{decode_lenient, query_string};
    use contracts::domain::a010_resource::aggregate::ComplianceStatus;

    fn input(query: &str) -> ListResourcesInput {
        decode_lenient(query_string::parse(query))
    }

    #[test]
    fn test_url_decodes_into_filters() {
        let input = input("?types[]=AWS.S3.Bucket&complianceStatus=FAIL&page=2&pageSize=50");
        assert_eq!(input.types, vec!["AWS.S3.Bucket".to_string()]);
        assert_eq!(input.compliance_status, Some(ComplianceStatus::Fail));
        assert_eq!(input.page, Some(2));
        assert_eq!(input.page_size, Some(50));
        assert_eq!(active_filter_count(&input), 2);
    }

    #[test]
    fn test_unknown_status_is_dropped() {
        let input = input("?complianceStatus=MAYBE&idContains=123&sortBy=type&sortDir=descending");
        assert!(input.compliance_status.is_none());
        // numeric search text still decodes as text
        assert_eq!(input.id_contains.as_deref(), Some("123"));
        assert_eq!(label_for(SORT_OPTIONS, input.sort_by, input.sort_dir), Some("Type (Z-A)"));
        assert_eq!(active_filter_count(&input), 1);
    }

    #[test]
    fn test_source_label_falls_back_to_id() {
        assert_eq!(source_label(&[], "acct-1"), "acct-1");
    }
}
