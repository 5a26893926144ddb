use contracts::domain::a002_data_model::aggregate::{DataModelSortField, ListDataModelsInput};
use contracts::shared::paging::SortDir;

use crate::shared::sort_options::SortOption;

pub const SORT_OPTIONS: &[SortOption<DataModelSortField>] = &[
    SortOption {
        label: "Id (A-Z)",
        sort_by: DataModelSortField::Id,
        sort_dir: SortDir::Ascending,
    },
    SortOption {
        label: "Id (Z-A)",
        sort_by: DataModelSortField::Id,
        sort_dir: SortDir::Descending,
    },
    SortOption {
        label: "Most Recent",
        sort_by: DataModelSortField::LastModified,
        sort_dir: SortDir::Descending,
    },
    SortOption {
        label: "Oldest",
        sort_by: DataModelSortField::LastModified,
        sort_dir: SortDir::Ascending,
    },
];

pub fn active_filter_count(input: &ListDataModelsInput) -> usize {
    usize::from(input.name_contains.is_some())
        + usize::from(input.enabled.is_some())
        + usize::from(!input.log_types.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sort_options::{find_by_label, label_for};
    use crate::shared::url_params::{decode_lenient, query_string};

    #[test]
    fn test_labels_map_to_url_pairs() {
        let expected = [
            ("Id (A-Z)", "?sortBy=id&sortDir=ascending"),
            ("Id (Z-A)", "?sortBy=id&sortDir=descending"),
            ("Most Recent", "?sortBy=lastModified&sortDir=descending"),
            ("Oldest", "?sortBy=lastModified&sortDir=ascending"),
        ];
        for (label, query) in expected {
            let input: ListDataModelsInput = decode_lenient(query_string::parse(query));
            assert_eq!(label_for(SORT_OPTIONS, input.sort_by, input.sort_dir), Some(label));
            assert!(find_by_label(SORT_OPTIONS, label).is_some());
        }
    }

    #[test]
    fn test_partial_sort_has_no_label() {
        let input: ListDataModelsInput = decode_lenient(query_string::parse("?sortBy=id"));
        assert_eq!(label_for(SORT_OPTIONS, input.sort_by, input.sort_dir), None);
    }

    #[test]
    fn test_active_filter_count_ignores_sort() {
        let input: ListDataModelsInput = decode_lenient(query_string::parse(
            "?enabled=true&logTypes[]=AWS.ALB&sortBy=id&sortDir=ascending",
        ));
        assert_eq!(active_filter_count(&input), 2);
        assert_eq!(active_filter_count(&ListDataModelsInput::default()), 0);
    }
}
