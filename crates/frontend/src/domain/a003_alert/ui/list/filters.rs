use contracts::domain::a003_alert::aggregate::{AlertSortField, AlertStatus, ListAlertsInput};
use contracts::shared::paging::SortDir;
use thaw::BadgeColor;

use crate::shared::sort_options::SortOption;
use crate::shared::text::to_plural;

pub const SORT_OPTIONS: &[SortOption<AlertSortField>] = &[
    SortOption {
        label: "Most Recent",
        sort_by: AlertSortField::CreatedAt,
        sort_dir: SortDir::Descending,
    },
    SortOption {
        label: "Oldest",
        sort_by: AlertSortField::CreatedAt,
        sort_dir: SortDir::Ascending,
    },
];

pub fn active_filter_count(input: &ListAlertsInput) -> usize {
    [
        input.name_contains.is_some(),
        !input.severity.is_empty(),
        !input.status.is_empty(),
        !input.log_types.is_empty(),
        input.event_count_min.is_some(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

pub fn status_color(status: AlertStatus) -> BadgeColor {
    match status {
        AlertStatus::Open => BadgeColor::Danger,
        AlertStatus::Triaged => BadgeColor::Warning,
        AlertStatus::Closed => BadgeColor::Subtle,
        AlertStatus::Resolved => BadgeColor::Success,
    }
}

/// Snackbar title after a bulk status change
pub fn status_update_message(count: usize, status: AlertStatus) -> String {
    let noun = to_plural("alert", "alerts", count);
    format!("Set {} {} to {}", count, noun, status.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::url_params::{decode_lenient, query_string};

    #[test]
    fn test_status_filter_from_url() {
        let input: ListAlertsInput = decode_lenient(query_string::parse(
            "?status[]=OPEN&status[]=TRIAGED&eventCountMin=5&pageSize=50",
        ));
        assert_eq!(input.status, vec![AlertStatus::Open, AlertStatus::Triaged]);
        assert_eq!(input.event_count_min, Some(5));
        assert_eq!(input.page_size, Some(50));
        assert_eq!(active_filter_count(&input), 2);
    }

    #[test]
    fn test_status_update_message() {
        assert_eq!(status_update_message(1, AlertStatus::Resolved), "Set 1 alert to Resolved");
        assert_eq!(status_update_message(3, AlertStatus::Closed), "Set 3 alerts to Closed");
    }
}
