pub mod api_utils;
pub mod components;
pub mod debounce;
pub mod format;
pub mod icons;
pub mod listing;
pub mod prefs;
