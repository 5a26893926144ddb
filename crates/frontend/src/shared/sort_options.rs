//! Named sort orders offered by list pages, each mapping to a
//! `sortBy`/`sortDir` pair in the URL.

use contracts::shared::paging::SortDir;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortOption<F: 'static> {
    pub label: &'static str,
    pub sort_by: F,
    pub sort_dir: SortDir,
}

/// Label of the option matching the current pair, if any
pub fn label_for<F: PartialEq + Copy>(
    options: &[SortOption<F>],
    sort_by: Option<F>,
    sort_dir: Option<SortDir>,
) -> Option<&'static str> {
    let (sort_by, sort_dir) = (sort_by?, sort_dir?);
    options
        .iter()
        .find(|o| o.sort_by == sort_by && o.sort_dir == sort_dir)
        .map(|o| o.label)
}

pub fn find_by_label<'a, F>(options: &'a [SortOption<F>], label: &str) -> Option<&'a SortOption<F>> {
    options.iter().find(|o| o.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: [SortOption<u8>; 2] = [
        SortOption {
            label: "Newest",
            sort_by: 1,
            sort_dir: SortDir::Descending,
        },
        SortOption {
            label: "Oldest",
            sort_by: 1,
            sort_dir: SortDir::Ascending,
        },
    ];

    #[test]
    fn test_label_for_requires_both_fields() {
        assert_eq!(label_for(&OPTIONS, Some(1), Some(SortDir::Ascending)), Some("Oldest"));
        assert_eq!(label_for(&OPTIONS, Some(1), None), None);
        assert_eq!(label_for(&OPTIONS, Some(2), Some(SortDir::Ascending)), None);
    }

    #[test]
    fn test_find_by_label() {
        assert_eq!(find_by_label(&OPTIONS, "Newest").map(|o| o.sort_dir), Some(SortDir::Descending));
        assert!(find_by_label(&OPTIONS, "Sort by").is_none());
    }
}
