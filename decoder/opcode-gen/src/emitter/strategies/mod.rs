pub mod listing;
pub mod rust;
