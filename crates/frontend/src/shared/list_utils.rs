//! Client-side search and sorting for lists the server returns in one piece.

use std::cmp::Ordering;

/// Minimum query length before a search narrows the list
pub const MIN_SEARCH_LEN: usize = 2;

pub trait Searchable {
    /// Case-insensitive match of an already lowercased query
    fn matches_filter(&self, query: &str) -> bool;
}

pub trait Sortable {
    type Column: Copy + PartialEq;

    fn compare_by_column(&self, other: &Self, column: Self::Column) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], column: T::Column, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_column(b, column);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Items matching `query`; short queries keep everything
pub fn filter_list<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_SEARCH_LEN {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&query))
        .collect()
}

/// Arrow shown next to a sortable column header
pub fn sort_indicator<C: PartialEq>(current: C, column: C, ascending: bool) -> &'static str {
    if current != column {
        " ⇅"
    } else if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

/// Clicking the active column flips the direction, another column sorts ascending
pub fn toggle_sort<C: PartialEq>(current: (C, bool), clicked: C) -> (C, bool) {
    let (column, ascending) = current;
    if column == clicked {
        (column, !ascending)
    } else {
        (clicked, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, u32);

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Col {
        Name,
        Age,
    }

    impl Searchable for Row {
        fn matches_filter(&self, query: &str) -> bool {
            self.0.to_lowercase().contains(query)
        }
    }

    impl Sortable for Row {
        type Column = Col;

        fn compare_by_column(&self, other: &Self, column: Col) -> Ordering {
            match column {
                Col::Name => self.0.cmp(other.0),
                Col::Age => self.1.cmp(&other.1),
            }
        }
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut rows = vec![Row("b", 2), Row("a", 3), Row("c", 1)];
        sort_list(&mut rows, Col::Name, true);
        assert_eq!(rows[0], Row("a", 3));
        sort_list(&mut rows, Col::Age, false);
        assert_eq!(rows, vec![Row("a", 3), Row("b", 2), Row("c", 1)]);
    }

    #[test]
    fn test_filter_list_ignores_short_queries() {
        let rows = vec![Row("Alice", 1), Row("Bob", 2)];
        assert_eq!(filter_list(rows.clone(), "a").len(), 2);
        assert_eq!(filter_list(rows, " AL ").len(), 1);
    }

    #[test]
    fn test_toggle_sort() {
        assert_eq!(toggle_sort((Col::Name, true), Col::Name), (Col::Name, false));
        assert_eq!(toggle_sort((Col::Name, false), Col::Age), (Col::Age, true));
        assert_eq!(sort_indicator(Col::Name, Col::Age, true), " ⇅");
        assert_eq!(sort_indicator(Col::Age, Col::Age, false), " ▼");
    }
}
