pub mod footer;
pub mod header;
pub mod review_section;
pub mod sticky_bar;
