pub mod page_state;
pub mod section_heading;
pub mod stat_card;
pub mod ui;
