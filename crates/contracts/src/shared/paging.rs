use serde::{Deserialize, Serialize};

/// Paging block returned with every paginated list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingData {
    pub this_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

impl Default for PagingData {
    fn default() -> Self {
        Self {
            this_page: 1,
            total_pages: 1,
            total_items: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Ascending,
    Descending,
}

impl SortDir {
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Ascending => SortDir::Descending,
            SortDir::Descending => SortDir::Ascending,
        }
    }
}
