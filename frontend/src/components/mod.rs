pub mod about_modal;
pub mod handlers;
pub mod header;
pub mod preview_area;
pub mod probability_bar;
pub mod results;
pub mod upload_section;
pub mod utils;
