pub mod listing;
pub mod weather;
