use contracts::domain::a009_analysis_pack::aggregate::ListAnalysisPacksInput;

pub fn active_filter_count(input: &ListAnalysisPacksInput) -> usize {
    [
        input.name_contains.is_some(),
        input.enabled.is_some(),
        input.update_available.is_some(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::url_params::{decode_lenient, query_string};

    fn input(query: &str) -> ListAnalysisPacksInput {
        decode_lenient(query_string::parse(query))
    }

    #[test]
    fn test_url_decodes_into_filters() {
        let input = input("?nameContains=aws&updateAvailable=true&page=4");
        assert_eq!(input.name_contains.as_deref(), Some("aws"));
        assert_eq!(input.update_available, Some(true));
        assert_eq!(input.enabled, None);
        assert_eq!(active_filter_count(&input), 2);
    }

    #[test]
    fn test_bad_flag_is_ignored() {
        let input = input("?enabled=maybe");
        assert_eq!(input.enabled, None);
        assert_eq!(active_filter_count(&input), 0);
    }
}
