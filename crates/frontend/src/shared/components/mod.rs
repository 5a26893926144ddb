pub mod confirm_modal;
pub mod filter_panel;
pub mod filter_select;
pub mod pagination_controls;
pub mod search_input;
pub mod selection_bar;
pub mod severity_badge;
pub mod sort_select;
