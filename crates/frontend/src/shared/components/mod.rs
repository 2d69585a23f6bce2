pub mod filter_tabs;
pub mod page_header;
pub mod stat_card;
