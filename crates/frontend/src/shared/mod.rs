pub mod api_utils;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod number_format;
pub mod toast;
pub mod url_state;
