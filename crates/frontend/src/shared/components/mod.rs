pub mod pagination_controls;
pub mod search_input;

pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;

use contracts::shared::listing::SortOrder;

/// Indicator glyph for a sortable column header.
pub fn sort_indicator(column: &str, active: &str, order: SortOrder) -> &'static str {
    if column == active {
        match order {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}
