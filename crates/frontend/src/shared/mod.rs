pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod feedback;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod modal;
pub mod modal_frame;
pub mod page_frame;
pub mod request_params;
pub mod select;
pub mod snackbar;
pub mod sort_options;
pub mod text;
pub mod url_params;
