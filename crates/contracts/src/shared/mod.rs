pub mod lenient;
pub mod paging;
