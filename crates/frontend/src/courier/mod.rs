pub mod alert_banner;
pub mod api;
pub mod board;
pub mod list_item;
pub mod page;
pub mod report_modal;
