pub mod data_table;
pub mod date_input;
pub mod page_header;
pub mod stat_card;
pub mod tab_strip;
pub mod ui;
